use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum WindowSizeError {
    InvalidSize { width: u32, height: u32 },
}

impl fmt::Display for WindowSizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(f, "window size must be positive: {}x{}", width, height)
            }
        }
    }
}

impl Error for WindowSizeError {}

/// Drawable surface dimensions in pixels, both strictly positive.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct WindowSize {
    width: u32,
    height: u32,
}

impl WindowSize {
    pub fn new(width: u32, height: u32) -> Result<Self, WindowSizeError> {
        if width == 0 || height == 0 {
            return Err(WindowSizeError::InvalidSize { width, height });
        }

        Ok(Self { width, height })
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
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_size_new_valid() {
        let size = WindowSize::new(800, 600).unwrap();

        assert_eq!(size.width(), 800);
        assert_eq!(size.height(), 600);
        assert_eq!(size.pixel_count(), 480_000);
    }

    #[test]
    fn test_window_size_new_zero_width() {
        let result = WindowSize::new(0, 600);

        assert_eq!(
            result,
            Err(WindowSizeError::InvalidSize {
                width: 0,
                height: 600
            })
        );
    }

    #[test]
    fn test_window_size_new_zero_height() {
        let result = WindowSize::new(800, 0);

        assert_eq!(
            result,
            Err(WindowSizeError::InvalidSize {
                width: 800,
                height: 0
            })
        );
    }

    #[test]
    fn test_window_size_one_by_one_is_valid() {
        let size = WindowSize::new(1, 1).unwrap();

        assert_eq!(size.pixel_count(), 1);
    }
}
