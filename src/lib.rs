pub mod board;
pub mod core;
pub mod dom;
pub mod gui;
pub mod persistence;
pub mod render;
pub mod telemetry;
pub mod transport;
