//! Interactive render loop.
//!
//! The loop owns the running/stopped state and the current draw colour.
//! It talks to the windowing collaborator exclusively through ports:
//! an [`EventSource`] for the input queue and a [`Canvas`] for rendering,
//! so the same loop runs against a real window or an in-memory frame.

pub mod ports;
mod render_loop;

pub use ports::canvas::{Canvas, ShapeCanvas};
pub use ports::event_source::EventSource;
pub use render_loop::RenderLoop;
