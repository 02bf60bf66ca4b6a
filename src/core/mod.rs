pub mod actions;
pub mod data;
