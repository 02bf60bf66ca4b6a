use crate::controllers::interactive::ports::canvas::{Canvas, ShapeCanvas};
use crate::core::data::draw_color::DrawColor;
use crate::core::data::frame_buffer::FrameBuffer;
use crate::core::data::point::Point;
use crate::core::data::rect::Rect;
use crate::core::data::window_size::WindowSize;

/// An in-memory rendering surface.
///
/// `present` has nothing to flush; it only counts frames so callers can
/// observe how many were produced.
pub struct BufferCanvas {
    frame: FrameBuffer,
    color: DrawColor,
    presented_frames: u64,
}

impl BufferCanvas {
    #[must_use]
    pub fn new(size: WindowSize) -> Self {
        Self {
            frame: FrameBuffer::new(size),
            color: DrawColor::BLACK,
            presented_frames: 0,
        }
    }

    #[must_use]
    pub fn frame(&self) -> &FrameBuffer {
        &self.frame
    }

    #[must_use]
    pub fn into_frame(self) -> FrameBuffer {
        self.frame
    }

    #[must_use]
    pub fn presented_frames(&self) -> u64 {
        self.presented_frames
    }

    fn plot(&mut self, point: Point) {
        // Plots outside the surface are clipped.
        let _ = self.frame.set_pixel(point, self.color);
    }
}

impl Canvas for BufferCanvas {
    fn set_draw_color(&mut self, color: DrawColor) {
        self.color = color;
    }

    fn clear(&mut self) {
        self.frame.fill(self.color);
    }

    fn present(&mut self) {
        self.presented_frames += 1;
    }
}

impl ShapeCanvas for BufferCanvas {
    fn draw_point(&mut self, point: Point) {
        self.plot(point);
    }

    fn draw_line(&mut self, from: Point, to: Point) {
        // Bresenham over all octants.
        let dx = (to.x - from.x).abs();
        let dy = -(to.y - from.y).abs();
        let step_x = if from.x < to.x { 1 } else { -1 };
        let step_y = if from.y < to.y { 1 } else { -1 };

        let mut err = dx + dy;
        let mut x = from.x;
        let mut y = from.y;

        loop {
            self.plot(Point { x, y });

            if x == to.x && y == to.y {
                break;
            }

            let doubled = 2 * err;
            if doubled >= dy {
                err += dy;
                x += step_x;
            }
            if doubled <= dx {
                err += dx;
                y += step_y;
            }
        }
    }

    fn draw_rect(&mut self, rect: Rect) {
        let top_left = rect.top_left();
        let top_right = Point {
            x: rect.right(),
            y: rect.y(),
        };
        let bottom_left = Point {
            x: rect.x(),
            y: rect.bottom(),
        };
        let bottom_right = Point {
            x: rect.right(),
            y: rect.bottom(),
        };

        self.draw_line(top_left, top_right);
        self.draw_line(bottom_left, bottom_right);
        self.draw_line(top_left, bottom_left);
        self.draw_line(top_right, bottom_right);
    }

    fn fill_rect(&mut self, rect: Rect) {
        for y in rect.y()..=rect.bottom() {
            for x in rect.x()..=rect.right() {
                self.plot(Point { x, y });
            }
        }
    }
}
