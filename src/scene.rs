use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::{self, LineMode, PixelBuffer};
use crate::math::{Circle, Color, Line, Rectangle};

/// 2D drawing operations applied to a pixel buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum DrawOp {
    /// Overwrite every pixel
    Fill { color: Color },

    Rectangle {
        #[serde(flatten)]
        rect: Rectangle,
        color: Color,
    },

    Circle {
        #[serde(flatten)]
        circle: Circle,
        color: Color,
    },

    Line {
        #[serde(flatten)]
        line: Line,
        color: Color,
    },
}

impl DrawOp {
    pub fn fill(color: Color) -> Self {
        Self::Fill { color }
    }

    pub fn rectangle(rect: Rectangle, color: Color) -> Self {
        Self::Rectangle { rect, color }
    }

    pub fn circle(circle: Circle, color: Color) -> Self {
        Self::Circle { circle, color }
    }

    pub fn line(line: Line, color: Color) -> Self {
        Self::Line { line, color }
    }

    /// Execute against `buffer`, mutating it in place
    pub fn apply(&self, buffer: &mut PixelBuffer, line_mode: LineMode) {
        match self {
            DrawOp::Fill { color } => buffer.fill_all(*color),
            DrawOp::Rectangle { rect, color } => core::fill_rectangle(buffer, rect, *color),
            DrawOp::Circle { circle, color } => core::fill_circle(buffer, circle, *color),
            DrawOp::Line { line, color } => core::draw_line_with(buffer, line, *color, line_mode),
        }
    }
}

/// Ordered list of draw operations, replayed onto a buffer in sequence
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawList {
    #[serde(default)]
    pub line_mode: LineMode,
    #[serde(default)]
    pub ops: Vec<DrawOp>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add draw operation - builder style
    pub fn draw(mut self, op: DrawOp) -> Self {
        self.ops.push(op);
        self
    }

    pub fn push(&mut self, op: DrawOp) {
        self.ops.push(op);
    }

    pub fn with_line_mode(mut self, line_mode: LineMode) -> Self {
        self.line_mode = line_mode;
        self
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Replay every operation onto `buffer` in order
    pub fn execute(&self, buffer: &mut PixelBuffer) {
        debug!("executing {} draw ops ({:?} lines)", self.ops.len(), self.line_mode);
        for op in &self.ops {
            op.apply(buffer, self.line_mode);
        }
    }
}

/// JSON scene description: buffer size, optional background and a draw list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneFile {
    pub width: u32,
    pub height: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<Color>,
    #[serde(flatten)]
    pub draw_list: DrawList,
}

impl SceneFile {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            background: None,
            draw_list: DrawList::new(),
        }
    }

    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("invalid scene description")
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read scene file {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("failed to parse {}", path.display()))
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("failed to serialize scene")
    }

    /// Allocate a buffer, paint the background and run the draw list
    pub fn render(&self) -> Result<PixelBuffer> {
        let mut buffer = PixelBuffer::new(self.width, self.height)?;
        buffer.fill_all(self.background.unwrap_or(Color::BLACK));
        self.draw_list.execute(&mut buffer);
        Ok(buffer)
    }
}
