use crate::core::data::draw_color::DrawColor;
use crate::core::data::point::Point;
use crate::core::data::window_size::WindowSize;

/// Maps a pointer position to a background colour: green follows x across
/// the window, blue follows y down it, red stays 0 and alpha is opaque.
///
/// Integer truncating division, so a pointer inside the window always lands
/// in `[0, 255]` per channel. Coordinates outside the window saturate.
#[must_use]
pub fn derive_draw_color(pointer: Point, window: WindowSize) -> DrawColor {
    let green = (i64::from(pointer.x) * 256 / i64::from(window.width())).clamp(0, 255);
    let blue = (i64::from(pointer.y) * 256 / i64::from(window.height())).clamp(0, 255);

    DrawColor::rgba(0, green as u8, blue as u8, 255)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window_800x600() -> WindowSize {
        WindowSize::new(800, 600).unwrap()
    }

    #[test]
    fn test_center_of_window_maps_to_half_intensity() {
        let color = derive_draw_color(Point { x: 400, y: 300 }, window_800x600());

        assert_eq!(color, DrawColor::rgba(0, 128, 128, 255));
    }

    #[test]
    fn test_top_left_corner_is_black() {
        let color = derive_draw_color(Point { x: 0, y: 0 }, window_800x600());

        assert_eq!(color, DrawColor::rgba(0, 0, 0, 255));
    }

    #[test]
    fn test_bottom_right_interior_pixel_is_maximal() {
        let color = derive_draw_color(Point { x: 799, y: 599 }, window_800x600());

        assert_eq!(color, DrawColor::rgba(0, 255, 255, 255));
    }

    #[test]
    fn test_red_zero_alpha_opaque_for_every_position() {
        let window = window_800x600();

        for x in (0..800).step_by(97) {
            for y in (0..600).step_by(89) {
                let color = derive_draw_color(Point { x, y }, window);

                assert_eq!(color.r, 0);
                assert_eq!(color.a, 255);
            }
        }
    }

    #[test]
    fn test_channels_stay_in_range_inside_window() {
        let window = WindowSize::new(3, 7).unwrap();

        for x in 0..3 {
            for y in 0..7 {
                // Channels are u8, so constructing the colour at all proves
                // the range; check the exact truncating arithmetic as well.
                let color = derive_draw_color(Point { x, y }, window);

                assert_eq!(i64::from(color.g), i64::from(x) * 256 / 3);
                assert_eq!(i64::from(color.b), i64::from(y) * 256 / 7);
            }
        }
    }

    #[test]
    fn test_same_position_always_yields_same_color() {
        let window = window_800x600();
        let position = Point { x: 123, y: 456 };

        let first = derive_draw_color(position, window);
        let second = derive_draw_color(position, window);

        assert_eq!(first, second);
    }

    #[test]
    fn test_out_of_window_positions_saturate() {
        let window = window_800x600();

        assert_eq!(
            derive_draw_color(Point { x: -50, y: -50 }, window),
            DrawColor::rgba(0, 0, 0, 255)
        );
        assert_eq!(
            derive_draw_color(Point { x: 5000, y: 5000 }, window),
            DrawColor::rgba(0, 255, 255, 255)
        );
    }
}
