//! GUI input adapter.
//!
//! Uses winit for window management and event delivery, pumped
//! non-blockingly so the render loop keeps its poll-drain-render shape.

pub mod commands;
mod event_pump;
mod events;

pub use event_pump::WinitEventPump;
pub use events::map_window_event;
