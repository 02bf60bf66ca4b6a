use std::error::Error;
use std::fmt;

use crate::core::data::point::Point;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RectError {
    InvalidSize { width: u32, height: u32 },
}

impl fmt::Display for RectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(f, "rect size must be positive: {}x{}", width, height)
            }
        }
    }
}

impl Error for RectError {}

/// An axis-aligned rectangle in window pixel coordinates.
///
/// The origin may lie outside the drawable surface; drawing clips.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Rect {
    x: i32,
    y: i32,
    width: u32,
    height: u32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Result<Self, RectError> {
        if width == 0 || height == 0 {
            return Err(RectError::InvalidSize { width, height });
        }

        Ok(Self {
            x,
            y,
            width,
            height,
        })
    }

    #[must_use]
    pub fn x(&self) -> i32 {
        self.x
    }

    #[must_use]
    pub fn y(&self) -> i32 {
        self.y
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn top_left(&self) -> Point {
        Point {
            x: self.x,
            y: self.y,
        }
    }

    /// Inclusive right edge.
    #[must_use]
    pub fn right(&self) -> i32 {
        self.x + self.width as i32 - 1
    }

    /// Inclusive bottom edge.
    #[must_use]
    pub fn bottom(&self) -> i32 {
        self.y + self.height as i32 - 1
    }
}
