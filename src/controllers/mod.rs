pub mod demo;
pub mod interactive;
pub mod ports;
