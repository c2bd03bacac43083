pub mod cli;
pub mod core;
pub mod demo;
pub mod math;
pub mod scene;

// Re-export the drawing surface and shapes for convenience
pub use crate::core::{LineMode, PixelBuffer, RasterError};
pub use math::{Circle, Color, Line, Rectangle};
pub use scene::{DrawList, DrawOp, SceneFile};
