use std::collections::VecDeque;
use std::time::Duration;

use winit::event::Event;
use winit::event_loop::EventLoop;
use winit::platform::pump_events::EventLoopExtPumpEvents;
use winit::window::WindowId;

use crate::controllers::interactive::ports::event_source::EventSource;
use crate::core::data::input_event::InputEvent;
use crate::core::data::window_size::WindowSize;
use crate::input::gui::events::map_window_event;

/// Non-blocking event source backed by the winit event loop.
///
/// Polling pumps the platform queue with a zero timeout whenever the local
/// queue runs dry, so a frame's drain sees everything the window system had
/// pending at that moment.
pub struct WinitEventPump {
    event_loop: EventLoop<()>,
    window_id: WindowId,
    window_size: WindowSize,
    pending: VecDeque<InputEvent>,
}

impl WinitEventPump {
    #[must_use]
    pub fn new(event_loop: EventLoop<()>, window_id: WindowId, window_size: WindowSize) -> Self {
        Self {
            event_loop,
            window_id,
            window_size,
            pending: VecDeque::new(),
        }
    }

    fn pump(&mut self) {
        let window_id = self.window_id;
        let window_size = self.window_size;
        let pending = &mut self.pending;

        let _ = self
            .event_loop
            .pump_events(Some(Duration::ZERO), |event, _elwt| {
                if let Event::WindowEvent { window_id: id, event } = event {
                    if id == window_id {
                        pending.push_back(map_window_event(&event, window_size));
                    }
                }
            });
    }
}

impl EventSource for WinitEventPump {
    fn poll_next_event(&mut self) -> Option<InputEvent> {
        if self.pending.is_empty() {
            self.pump();
        }

        self.pending.pop_front()
    }
}
