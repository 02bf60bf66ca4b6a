use crate::core::data::input_event::InputEvent;

pub trait EventSource {
    /// Non-blocking: returns the next pending event, or `None` when the
    /// queue is empty.
    fn poll_next_event(&mut self) -> Option<InputEvent>;
}
