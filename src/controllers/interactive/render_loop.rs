use crate::controllers::interactive::ports::canvas::Canvas;
use crate::controllers::interactive::ports::event_source::EventSource;
use crate::core::actions::derive_draw_color::derive_draw_color;
use crate::core::data::draw_color::DrawColor;
use crate::core::data::input_event::InputEvent;
use crate::core::data::loop_state::LoopState;
use crate::core::data::window_size::WindowSize;

/// Drives the application from started to terminated.
///
/// Each frame drains every pending input event, then issues exactly one
/// clear + present pair. A `Quit` event moves the loop to `Stopped`;
/// `PointerMoved` recomputes the background colour from the pointer
/// position. The loop never sleeps; pacing, if any, comes from the
/// canvas's `present`.
pub struct RenderLoop {
    window_size: WindowSize,
    state: LoopState,
    draw_color: DrawColor,
}

impl RenderLoop {
    #[must_use]
    pub fn new(window_size: WindowSize) -> Self {
        Self {
            window_size,
            state: LoopState::Running,
            draw_color: DrawColor::BLACK,
        }
    }

    /// Runs frames until a `Quit` event is observed, then returns.
    /// The frame that drained the `Quit` is still rendered.
    pub fn run<E, C>(&mut self, events: &mut E, canvas: &mut C)
    where
        E: EventSource,
        C: Canvas,
    {
        while self.state.is_running() {
            self.run_frame(events, canvas);
        }
    }

    /// One frame: drain the event queue, then clear and present once.
    pub fn run_frame<E, C>(&mut self, events: &mut E, canvas: &mut C) -> LoopState
    where
        E: EventSource,
        C: Canvas,
    {
        while let Some(event) = events.poll_next_event() {
            self.handle_event(event);
        }

        canvas.set_draw_color(self.draw_color);
        canvas.clear();
        canvas.present();

        self.state
    }

    fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::Quit => {
                self.state = self.state.stopped();
            }
            InputEvent::PointerMoved(position) => {
                self.draw_color = derive_draw_color(position, self.window_size);
            }
            InputEvent::Ignored => {}
        }
    }

    #[must_use]
    pub fn state(&self) -> LoopState {
        self.state
    }

    #[must_use]
    pub fn draw_color(&self) -> DrawColor {
        self.draw_color
    }
}
