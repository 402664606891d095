//! Shared utilities for the Critmass chain-reaction game.
//!
//! Currently this crate only carries the logging bootstrap so the server
//! binary and integration tests configure tracing the same way.

pub mod logger;

pub use logger::setup_logger;
