mod color;
mod shapes;
mod span;

pub use color::Color;
pub use shapes::{Circle, Line, Rectangle};
pub use span::PixelSpan;
