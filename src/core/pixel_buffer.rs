use std::slice::ChunksExact;

use log::debug;

use super::error::{RasterError, Result};
use crate::math::Color;

/// Owned 2D grid of packed colors.
///
/// Storage is one contiguous row-major allocation of `width * height`
/// pixels; pixel `(x, y)` lives at index `x + y * width`. Dimensions are
/// fixed for the lifetime of the buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl PixelBuffer {
    /// Allocate a `width` x `height` buffer.
    ///
    /// Pixels start zeroed, but callers should treat them as undefined until
    /// the first fill.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(RasterError::InvalidDimensions { width, height });
        }

        let len = (width as usize)
            .checked_mul(height as usize)
            .ok_or(RasterError::Allocation { width, height })?;

        let mut pixels = Vec::new();
        pixels
            .try_reserve_exact(len)
            .map_err(|_| RasterError::Allocation { width, height })?;
        pixels.resize(len, Color::default());

        debug!("allocated {}x{} pixel buffer", width, height);

        Ok(Self { width, height, pixels })
    }

    /// Wrap existing row-major pixels, which must hold exactly `width * height` entries
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Color>) -> Result<Self> {
        if width == 0 || height == 0 || pixels.len() as u64 != u64::from(width) * u64::from(height) {
            return Err(RasterError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height, pixels })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Total pixel count, always `width * height`
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Overwrite every pixel
    pub fn fill_all(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    pub fn contains(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height
    }

    /// Flat index of `(x, y)`. Only meaningful for in-bounds coordinates.
    pub fn index_of(&self, x: u32, y: u32) -> usize {
        x as usize + y as usize * self.width as usize
    }

    pub fn get(&self, x: u32, y: u32) -> Option<Color> {
        if self.contains(x, y) {
            Some(self.pixels[self.index_of(x, y)])
        } else {
            None
        }
    }

    /// Read an in-bounds pixel.
    ///
    /// # Panics
    /// If `(x, y)` lies outside the buffer.
    pub fn pixel(&self, x: u32, y: u32) -> Color {
        assert!(
            self.contains(x, y),
            "pixel ({x}, {y}) outside {}x{} buffer",
            self.width,
            self.height
        );
        self.pixels[self.index_of(x, y)]
    }

    /// Write an in-bounds pixel.
    ///
    /// # Panics
    /// If `(x, y)` lies outside the buffer. Shape operations clamp before
    /// calling this.
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        assert!(
            self.contains(x, y),
            "pixel ({x}, {y}) outside {}x{} buffer",
            self.width,
            self.height
        );
        let idx = self.index_of(x, y);
        self.pixels[idx] = color;
    }

    /// Bounds-checked write for signed coordinates, returns whether a pixel changed
    pub fn put(&mut self, x: i64, y: i64, color: Color) -> bool {
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return false;
        }
        let idx = self.index_of(x as u32, y as u32);
        self.pixels[idx] = color;
        true
    }

    /// Row-major pixel slice
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Mutable slice of row `y` restricted to columns `[x0, x1)`
    pub(crate) fn row_span_mut(&mut self, y: u32, x0: u32, x1: u32) -> &mut [Color] {
        let start = self.index_of(x0, y);
        let end = self.index_of(x1, y);
        &mut self.pixels[start..end]
    }

    /// Iterate rows top to bottom
    pub fn rows(&self) -> ChunksExact<'_, Color> {
        self.pixels.chunks_exact(self.width as usize)
    }

    /// Count pixels equal to `color`
    pub fn count(&self, color: Color) -> usize {
        self.pixels.iter().filter(|&&p| p == color).count()
    }
}
