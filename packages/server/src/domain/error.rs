//! Domain layer error definitions.

use thiserror::Error;

use super::value_object::RoomCode;

/// Errors related to Value Objects validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueObjectError {
    /// Player name shorter than the allowed minimum
    #[error("Player name must be at least {min} characters (got {actual})")]
    PlayerNameTooShort { min: usize, actual: usize },

    /// Player name longer than the allowed maximum
    #[error("Player name cannot exceed {max} characters (got {actual})")]
    PlayerNameTooLong { max: usize, actual: usize },

    /// Room code of the wrong length or with non-alphanumeric characters
    #[error("Room code must be 6 uppercase alphanumeric characters (got: {0})")]
    RoomCodeInvalid(String),
}

/// Errors raised by the pure grid simulation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Target coordinates fall outside the board
    #[error("Cell ({row}, {col}) is outside a {size}x{size} board")]
    OutOfBounds { row: usize, col: usize, size: usize },

    /// Target cell is owned by another player
    #[error("Cell ({row}, {col}) is owned by another player")]
    CellOwnedByOther { row: usize, col: usize },
}

/// Errors raised by the per-room game state machine
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Join attempted with the room already at capacity
    #[error("Room is full: maximum {capacity} players allowed")]
    RoomFull { capacity: usize },

    /// Join attempted after the game started
    #[error("Game has already started")]
    GameAlreadyStarted,

    /// Start attempted by a player other than the host
    #[error("Only the host may start the game")]
    NotHost,

    /// Move attempted outside the in-progress phase
    #[error("Game is not in progress")]
    GameNotInProgress,

    /// Move attempted by a player out of turn
    #[error("It is not this player's turn")]
    NotYourTurn,

    /// Move targets an illegal cell
    #[error(transparent)]
    IllegalCell(#[from] GridError),
}

/// Errors raised by the room registry
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// No room exists under the given code
    #[error("Room not found: {0}")]
    RoomNotFound(RoomCode),

    /// A room already exists under the given code
    #[error("Room code already taken: {0}")]
    CodeTaken(RoomCode),

    /// The underlying game operation was rejected
    #[error(transparent)]
    Game(#[from] GameError),
}
