/// Lifecycle of the render loop.
///
/// `Stopped` is terminal: the only transition is `Running` to `Stopped`,
/// and `stopped()` maps both states to `Stopped`, so the state can never
/// move back to `Running`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Stopped,
}

impl LoopState {
    #[must_use]
    pub fn is_running(self) -> bool {
        matches!(self, Self::Running)
    }

    #[must_use]
    pub fn stopped(self) -> Self {
        Self::Stopped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_running_is_running() {
        assert!(LoopState::Running.is_running());
        assert!(!LoopState::Stopped.is_running());
    }

    #[test]
    fn test_stopped_transition_from_running() {
        let state = LoopState::Running.stopped();

        assert_eq!(state, LoopState::Stopped);
    }

    #[test]
    fn test_stopped_is_terminal() {
        let state = LoopState::Stopped.stopped();

        assert_eq!(state, LoopState::Stopped);
    }
}
