//! Domain layer for the chain-reaction game.
//!
//! This module contains business logic that is independent of
//! data transfer objects (DTOs) and infrastructure concerns.

pub mod entity;
pub mod error;
pub mod factory;
pub mod grid;
pub mod registry;
pub mod value_object;

pub use entity::{GamePhase, MoveResult, Player, Room, ROOM_CAPACITY};
pub use error::{GameError, GridError, RegistryError, ValueObjectError};
pub use factory::{PlayerIdFactory, RoomCodeFactory};
pub use grid::{Board, Cell, MoveOutcome, DEFAULT_BOARD_SIZE};
pub use registry::{RemovalEffect, RoomRegistry};
pub use value_object::{ColorIndex, PlayerId, PlayerName, RoomCode, Timestamp};
