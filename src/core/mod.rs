pub mod error;
pub mod pixel_buffer;
pub mod ppm;
pub mod rasterizer;

pub use error::RasterError;
pub use pixel_buffer::PixelBuffer;
pub use ppm::{load, read_ppm, save, write_ppm, PpmImage};
pub use rasterizer::{draw_line, draw_line_with, fill_circle, fill_rectangle, LineMode};
