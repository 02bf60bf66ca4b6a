use crate::core::data::point::Point;

/// One pending input occurrence from the windowing collaborator.
///
/// Anything the render loop does not react to arrives as `Ignored`,
/// so adapters never need to filter the queue themselves.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// The user asked to close the application.
    Quit,
    /// The pointer moved to a new position in window pixel coordinates,
    /// origin top-left.
    PointerMoved(Point),
    /// Any other event kind; drained and discarded.
    Ignored,
}
