//! UI layer: the Axum HTTP/WebSocket surface.

pub mod handler;
pub mod runner;
pub mod signal;
pub mod state;

pub use runner::run_server;
