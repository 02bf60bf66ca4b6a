use crate::core::data::draw_color::DrawColor;
use crate::core::data::point::Point;
use crate::core::data::rect::Rect;

/// The rendering side of the windowing collaborator.
///
/// The render loop treats all three operations as infallible; adapters
/// report their own failures out of band.
pub trait Canvas {
    /// Sets the colour used by subsequent clear and draw operations.
    fn set_draw_color(&mut self, color: DrawColor);

    /// Fills the whole drawable surface with the current draw colour.
    fn clear(&mut self);

    /// Flushes the drawn frame to the display. May block until the next
    /// display refresh interval.
    fn present(&mut self);
}

/// Primitive shape drawing on top of a [`Canvas`].
///
/// All operations draw with the current draw colour and clip silently at
/// the surface edges.
pub trait ShapeCanvas: Canvas {
    fn draw_point(&mut self, point: Point);
    fn draw_line(&mut self, from: Point, to: Point);
    /// Outline only.
    fn draw_rect(&mut self, rect: Rect);
    fn fill_rect(&mut self, rect: Rect);
}
