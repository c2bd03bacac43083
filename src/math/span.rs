use std::ops::Range;

use super::shapes::{Line, Rectangle};

/// Half-open pixel region `[x0, x1) x [y0, y1)` already clipped to a buffer.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct PixelSpan {
    pub x0: u32,
    pub y0: u32,
    pub x1: u32,
    pub y1: u32,
}

impl PixelSpan {
    pub const fn new(x0: u32, y0: u32, x1: u32, y1: u32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Region covered by `rect` inside a `width` x `height` buffer.
    ///
    /// An origin coordinate outside `[0, extent)` snaps to 0 on that axis
    /// (it is not clipped proportionally). The far edges are then clamped
    /// to the buffer extent.
    pub fn for_rectangle(rect: &Rectangle, width: u32, height: u32) -> Self {
        let x0 = snap_to_origin(rect.x, width);
        let y0 = snap_to_origin(rect.y, height);
        let x1 = (u64::from(x0) + u64::from(rect.width)).min(u64::from(width)) as u32;
        let y1 = (u64::from(y0) + u64::from(rect.height)).min(u64::from(height)) as u32;
        Self::new(x0, y0, x1, y1)
    }

    /// Bounding box of `line` with both corners clamped into the buffer.
    ///
    /// The box is inclusive of both endpoints, so the returned span ends one
    /// past the clamped maximum. Always covers at least one pixel.
    pub fn for_line(line: &Line, width: u32, height: u32) -> Self {
        let max_x = (i64::from(width) - 1).max(0);
        let max_y = (i64::from(height) - 1).max(0);
        let clamp_x = |v: i32| i64::from(v).clamp(0, max_x) as u32;
        let clamp_y = |v: i32| i64::from(v).clamp(0, max_y) as u32;

        let start_x = clamp_x(line.x1.min(line.x2));
        let end_x = clamp_x(line.x1.max(line.x2));
        let start_y = clamp_y(line.y1.min(line.y2));
        let end_y = clamp_y(line.y1.max(line.y2));

        Self::new(start_x, start_y, end_x + 1, end_y + 1)
    }

    pub fn is_empty(&self) -> bool {
        self.x1 <= self.x0 || self.y1 <= self.y0
    }

    pub fn xs(&self) -> Range<u32> {
        self.x0..self.x1.max(self.x0)
    }

    pub fn ys(&self) -> Range<u32> {
        self.y0..self.y1.max(self.y0)
    }

    /// Number of pixels covered
    pub fn area(&self) -> u64 {
        if self.is_empty() {
            0
        } else {
            u64::from(self.x1 - self.x0) * u64::from(self.y1 - self.y0)
        }
    }
}

fn snap_to_origin(coord: i32, extent: u32) -> u32 {
    if coord < 0 || coord as u32 >= extent {
        0
    } else {
        coord as u32
    }
}
