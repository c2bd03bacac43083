use log::{debug, trace};
use serde::{Deserialize, Serialize};

use super::pixel_buffer::PixelBuffer;
use crate::math::{Circle, Color, Line, PixelSpan, Rectangle};

/// How non-trivial lines are turned into pixels
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineMode {
    /// Color pixels of the bounding box that satisfy `y == slope * x + intercept`
    /// exactly. Vertical lines fill their whole bounding box. Steep or
    /// irrational slopes can come out sparse or empty.
    #[default]
    Exact,
    /// Integer Bresenham stroke, one pixel wide, endpoints included
    Bresenham,
}

/// Fill a rectangle, snapping an out-of-range origin to 0 and clamping the far edges
pub fn fill_rectangle(buffer: &mut PixelBuffer, rect: &Rectangle, color: Color) {
    let span = PixelSpan::for_rectangle(rect, buffer.width(), buffer.height());
    trace!("fill_rectangle {:?} -> {:?}", rect, span);

    if span.is_empty() {
        return;
    }
    fill_span(buffer, &span, color);
}

/// Fill every pixel whose squared distance to the center is at most `radius²`.
///
/// Tests the whole buffer, not just the circle's bounding box.
pub fn fill_circle(buffer: &mut PixelBuffer, circle: &Circle, color: Color) {
    trace!("fill_circle {:?}", circle);

    for y in 0..buffer.height() {
        for x in 0..buffer.width() {
            if circle.contains(i64::from(x), i64::from(y)) {
                buffer.set(x, y, color);
            }
        }
    }
}

/// Draw a line with [`LineMode::Exact`]
pub fn draw_line(buffer: &mut PixelBuffer, line: &Line, color: Color) {
    draw_line_with(buffer, line, color, LineMode::Exact);
}

pub fn draw_line_with(buffer: &mut PixelBuffer, line: &Line, color: Color, mode: LineMode) {
    trace!("draw_line {:?} ({:?})", line, mode);

    match mode {
        LineMode::Exact => draw_line_exact(buffer, line, color),
        LineMode::Bresenham => draw_line_bresenham(buffer, line, color),
    }
}

fn draw_line_exact(buffer: &mut PixelBuffer, line: &Line, color: Color) {
    let span = PixelSpan::for_line(line, buffer.width(), buffer.height());

    let Some((slope, intercept)) = line.slope_intercept() else {
        fill_span(buffer, &span, color);
        return;
    };

    for y in span.ys() {
        for x in span.xs() {
            let residual = f64::from(y) - slope * f64::from(x) - intercept;
            if residual == 0.0 {
                buffer.set(x, y, color);
            }
        }
    }
}

/// Steps are bounded by the buffer: the segment is clipped before walking.
fn draw_line_bresenham(buffer: &mut PixelBuffer, line: &Line, color: Color) {
    let Some(line) = line.clip_to(buffer.width(), buffer.height()) else {
        trace!("bresenham line {:?} misses the buffer", line);
        return;
    };

    let (mut x, mut y) = (i64::from(line.x1), i64::from(line.y1));
    let (x2, y2) = (i64::from(line.x2), i64::from(line.y2));

    let dx = (x2 - x).abs();
    let dy = -(y2 - y).abs();
    let sx = if x < x2 { 1 } else { -1 };
    let sy = if y < y2 { 1 } else { -1 };
    let mut err = dx + dy;
    let mut plotted = 0usize;

    loop {
        if buffer.put(x, y, color) {
            plotted += 1;
        }

        if x == x2 && y == y2 {
            break;
        }

        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }

    debug!("bresenham line plotted {} pixels", plotted);
}

fn fill_span(buffer: &mut PixelBuffer, span: &PixelSpan, color: Color) {
    for y in span.ys() {
        buffer.row_span_mut(y, span.x0, span.x1).fill(color);
    }
}
