use winit::event::WindowEvent;

use crate::core::data::input_event::InputEvent;
use crate::core::data::point::Point;
use crate::core::data::window_size::WindowSize;

/// Translates a winit window event into the loop's input event type.
///
/// Pointer coordinates are clamped to the window bounds, so downstream
/// consumers always see positions inside `[0, width) x [0, height)`.
#[must_use]
pub fn map_window_event(event: &WindowEvent, window_size: WindowSize) -> InputEvent {
    match event {
        WindowEvent::CloseRequested => InputEvent::Quit,
        WindowEvent::CursorMoved { position, .. } => {
            let x = (position.x as i32).clamp(0, window_size.width() as i32 - 1);
            let y = (position.y as i32).clamp(0, window_size.height() as i32 - 1);

            InputEvent::PointerMoved(Point { x, y })
        }
        _ => InputEvent::Ignored,
    }
}
