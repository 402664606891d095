//! Authoritative server for the Critmass chain-reaction game.
//!
//! Players place atoms into cells of a 10x10 board; a cell pushed past its
//! capacity explodes into its orthogonal neighbours, potentially cascading.
//! The last player owning any cell wins. This crate hosts the room registry,
//! the per-room turn state machine and the pure grid simulation behind an
//! Axum WebSocket endpoint.

pub mod common;
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

// Re-export the server entry point
pub use ui::run_server;
