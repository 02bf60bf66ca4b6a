//! Port definitions for the interactive render loop.
//!
//! Contains trait definitions that define interfaces between the loop
//! and the windowing collaborator (event queue, rendering surface).

pub mod canvas;
pub mod event_source;
