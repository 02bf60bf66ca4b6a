use crate::controllers::interactive::ports::canvas::ShapeCanvas;
use crate::core::data::draw_color::DrawColor;
use crate::core::data::point::Point;
use crate::core::data::rect::{Rect, RectError};
use crate::core::data::window_size::WindowSize;

const OUTLINED_RECT_X: i32 = 100;
const RECT_WIDTH: u32 = 150;
const RECT_HEIGHT: u32 = 100;
const RECT_Y: i32 = 150;
const LINE_Y: i32 = 100;

/// Draws the primitive-shape showcase: a red point at the window center,
/// a green line across the full width, a yellow outlined rectangle and a
/// blue filled rectangle of the same size mirrored to the right half.
///
/// Issues exactly one clear and one present around the draw calls.
pub fn draw_demo_scene<C: ShapeCanvas>(
    canvas: &mut C,
    window: WindowSize,
) -> Result<(), RectError> {
    canvas.set_draw_color(DrawColor::BLACK);
    canvas.clear();

    let center = Point {
        x: window.width() as i32 / 2,
        y: window.height() as i32 / 2,
    };
    canvas.set_draw_color(DrawColor::rgb(255, 0, 0));
    canvas.draw_point(center);

    canvas.set_draw_color(DrawColor::rgb(0, 255, 0));
    canvas.draw_line(
        Point { x: 0, y: LINE_Y },
        Point {
            x: window.width() as i32,
            y: LINE_Y,
        },
    );

    let outlined = Rect::new(OUTLINED_RECT_X, RECT_Y, RECT_WIDTH, RECT_HEIGHT)?;
    canvas.set_draw_color(DrawColor::rgb(255, 255, 0));
    canvas.draw_rect(outlined);

    // Same size, mirrored horizontally: equal margins on both sides.
    let mirrored_x = window.width() as i32 - outlined.width() as i32 - outlined.x();
    let filled = Rect::new(mirrored_x, outlined.y(), outlined.width(), outlined.height())?;
    canvas.set_draw_color(DrawColor::rgb(0, 0, 255));
    canvas.fill_rect(filled);

    canvas.present();

    Ok(())
}
