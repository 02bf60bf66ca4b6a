use std::collections::VecDeque;

use crate::controllers::interactive::ports::event_source::EventSource;
use crate::core::data::input_event::InputEvent;

/// Replays a fixed sequence of events, then reports an empty queue forever.
///
/// Used by the headless demo and by tests to script an interactive session
/// without a window system.
pub struct ScriptedEventSource {
    queue: VecDeque<InputEvent>,
}

impl ScriptedEventSource {
    #[must_use]
    pub fn new(events: impl IntoIterator<Item = InputEvent>) -> Self {
        Self {
            queue: events.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }
}

impl EventSource for ScriptedEventSource {
    fn poll_next_event(&mut self) -> Option<InputEvent> {
        self.queue.pop_front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::point::Point;

    #[test]
    fn test_events_come_back_in_order() {
        let mut source = ScriptedEventSource::new([
            InputEvent::PointerMoved(Point { x: 1, y: 2 }),
            InputEvent::Ignored,
            InputEvent::Quit,
        ]);

        assert_eq!(source.len(), 3);
        assert_eq!(
            source.poll_next_event(),
            Some(InputEvent::PointerMoved(Point { x: 1, y: 2 }))
        );
        assert_eq!(source.poll_next_event(), Some(InputEvent::Ignored));
        assert_eq!(source.poll_next_event(), Some(InputEvent::Quit));
    }

    #[test]
    fn test_empty_source_stays_empty() {
        let mut source = ScriptedEventSource::new([]);

        assert!(source.is_empty());
        assert_eq!(source.poll_next_event(), None);
        assert_eq!(source.poll_next_event(), None);
    }
}
