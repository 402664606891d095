//! Use case layer error definitions.

use thiserror::Error;

use crate::domain::{RegistryError, ValueObjectError};

/// Errors from room creation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CreateRoomError {
    /// The requested player name failed validation
    #[error(transparent)]
    Validation(#[from] ValueObjectError),

    /// Code generation kept colliding with live rooms
    #[error("Could not allocate a unique room code")]
    CodeSpaceExhausted,
}

/// Errors from actions on an existing room (join, ready, start, move)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameActionError {
    /// A payload field failed validation
    #[error(transparent)]
    Validation(#[from] ValueObjectError),

    /// The registry or the game state machine rejected the action
    #[error(transparent)]
    Registry(#[from] RegistryError),
}
