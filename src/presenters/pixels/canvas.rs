use log::error;
use pixels::Pixels;

use crate::controllers::interactive::ports::canvas::Canvas;
use crate::core::data::draw_color::DrawColor;

/// Canvas adapter over a `pixels` framebuffer bound to a window.
///
/// `present` blocks on the surface's refresh behaviour; a failed render is
/// logged and the frame dropped rather than stopping the loop.
pub struct PixelsCanvas {
    pixels: Pixels<'static>,
    color: DrawColor,
}

impl PixelsCanvas {
    #[must_use]
    pub fn new(pixels: Pixels<'static>) -> Self {
        Self {
            pixels,
            color: DrawColor::BLACK,
        }
    }
}

impl Canvas for PixelsCanvas {
    fn set_draw_color(&mut self, color: DrawColor) {
        self.color = color;
    }

    fn clear(&mut self) {
        let rgba = [self.color.r, self.color.g, self.color.b, self.color.a];

        for pixel in self.pixels.frame_mut().chunks_exact_mut(4) {
            pixel.copy_from_slice(&rgba);
        }
    }

    fn present(&mut self) {
        if let Err(e) = self.pixels.render() {
            error!("render error: {e}");
        }
    }
}
