//! Reference demo images: nested rectangles, a grid of growing circles and a
//! set of axis-aligned and diagonal lines.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::info;

use crate::core::{self, LineMode, PixelBuffer};
use crate::math::{Circle, Color, Line, Rectangle};
use crate::scene::{DrawList, DrawOp};

pub const DEFAULT_SIZE: u32 = 800;

pub const RECTANGLES_FILE: &str = "rectangles.ppm";
pub const CIRCLES_FILE: &str = "circles.ppm";
pub const LINES_FILE: &str = "lines.ppm";

pub const BACKGROUND: Color = Color(0x00FF_BCBC);

/// Spacing between circle centers in the circles demo
const CIRCLE_CELL: u32 = 100;

/// Three nested squares on a pink background
pub fn rectangles(size: u32) -> DrawList {
    let eighth = (size / 8) as i32;
    let side = |n: u32| size / 8 * n;

    DrawList::new()
        .draw(DrawOp::fill(BACKGROUND))
        .draw(DrawOp::rectangle(
            Rectangle::new(eighth, eighth, side(6), side(6)),
            Color(0x0000_00FF),
        ))
        .draw(DrawOp::rectangle(
            Rectangle::new(eighth * 2, eighth * 2, side(4), side(4)),
            Color(0x0000_FFFF),
        ))
        .draw(DrawOp::rectangle(
            Rectangle::new(eighth * 3, eighth * 3, side(2), side(2)),
            Color(0x00FF_00FF),
        ))
}

/// Grid of green circles whose radius grows by 5 with each column
pub fn circles(size: u32) -> DrawList {
    let mut list = DrawList::new().draw(DrawOp::fill(Color::BLACK));
    let mut radius = 10;

    for x in (0..size).step_by(CIRCLE_CELL as usize) {
        radius += 5;
        for y in (0..size).step_by(CIRCLE_CELL as usize) {
            let center_x = (x + CIRCLE_CELL / 2) as i32;
            let center_y = (y + CIRCLE_CELL / 2) as i32;
            let circle = Circle::new(center_x, center_y, radius);
            list.push(DrawOp::circle(circle, Color(0x0000_FF00)));
        }
    }

    list
}

/// Two horizontal lines, two vertical bands and both diagonals
pub fn lines(size: u32) -> DrawList {
    let last = size as i32 - 1;
    let quarter = (size / 4) as i32;

    DrawList::new()
        .draw(DrawOp::fill(Color::BLACK))
        .draw(DrawOp::line(Line::new(0, quarter, last, quarter), Color(0x00FF_0000)))
        .draw(DrawOp::line(Line::new(0, quarter * 3, last, quarter * 3), Color(0x0000_FF00)))
        .draw(DrawOp::line(Line::new(quarter, 0, quarter, last), Color(0x00A0_00FF)))
        .draw(DrawOp::line(Line::new(quarter * 3, 0, quarter * 3, last), Color(0x00F0_FF0F)))
        .draw(DrawOp::line(Line::new(0, 0, last, last), Color::WHITE))
        .draw(DrawOp::line(Line::new(last, 0, 0, last), Color::WHITE))
}

/// Render all three demos into `out_dir`, returning the written paths.
///
/// A single buffer is reused across the demos; each one starts with a fill.
pub fn render_all(out_dir: &Path, size: u32, line_mode: LineMode) -> Result<Vec<PathBuf>> {
    let mut buffer = PixelBuffer::new(size, size)?;
    let demos = [
        (RECTANGLES_FILE, rectangles(size)),
        (CIRCLES_FILE, circles(size)),
        (LINES_FILE, lines(size).with_line_mode(line_mode)),
    ];

    let mut written = Vec::with_capacity(demos.len());
    for (file_name, list) in demos {
        list.execute(&mut buffer);

        let path = out_dir.join(file_name);
        core::save(&buffer, &path)
            .with_context(|| format!("could not save file {}", path.display()))?;
        info!("demo {} done ({} ops)", file_name, list.len());
        written.push(path);
    }

    Ok(written)
}
