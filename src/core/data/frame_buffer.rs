use std::error::Error;
use std::fmt;

use crate::core::data::draw_color::DrawColor;
use crate::core::data::point::Point;
use crate::core::data::window_size::WindowSize;

const BYTES_PER_PIXEL: usize = 4;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FrameBufferError {
    PixelOutsideBounds { pixel: Point, size: WindowSize },
}

impl fmt::Display for FrameBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PixelOutsideBounds { pixel, size } => {
                write!(
                    f,
                    "pixel at x:{}, y:{} outside of frame bounds {}x{}",
                    pixel.x,
                    pixel.y,
                    size.width(),
                    size.height()
                )
            }
        }
    }
}

impl Error for FrameBufferError {}

/// An in-memory RGBA frame, one byte per channel, rows top to bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    size: WindowSize,
    data: Vec<u8>,
}

impl FrameBuffer {
    /// Creates an opaque black frame.
    #[must_use]
    pub fn new(size: WindowSize) -> Self {
        let mut frame = Self {
            size,
            data: vec![0; size.pixel_count() * BYTES_PER_PIXEL],
        };
        frame.fill(DrawColor::BLACK);

        frame
    }

    #[must_use]
    pub fn size(&self) -> WindowSize {
        self.size
    }

    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && (point.x as u32) < self.size.width()
            && (point.y as u32) < self.size.height()
    }

    pub fn fill(&mut self, color: DrawColor) {
        let rgba = [color.r, color.g, color.b, color.a];

        for pixel in self.data.chunks_exact_mut(BYTES_PER_PIXEL) {
            pixel.copy_from_slice(&rgba);
        }
    }

    pub fn set_pixel(&mut self, pixel: Point, color: DrawColor) -> Result<(), FrameBufferError> {
        if !self.contains(pixel) {
            return Err(FrameBufferError::PixelOutsideBounds {
                pixel,
                size: self.size,
            });
        }

        let index =
            (pixel.y as usize * self.size.width() as usize + pixel.x as usize) * BYTES_PER_PIXEL;

        self.data[index] = color.r;
        self.data[index + 1] = color.g;
        self.data[index + 2] = color.b;
        self.data[index + 3] = color.a;

        Ok(())
    }

    #[must_use]
    pub fn pixel(&self, pixel: Point) -> Option<DrawColor> {
        if !self.contains(pixel) {
            return None;
        }

        let index =
            (pixel.y as usize * self.size.width() as usize + pixel.x as usize) * BYTES_PER_PIXEL;

        Some(DrawColor::rgba(
            self.data[index],
            self.data[index + 1],
            self.data[index + 2],
            self.data[index + 3],
        ))
    }
}
