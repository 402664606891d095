//! Room registry abstraction.
//!
//! The registry is the only process-wide mutable structure. It is defined
//! here as a trait and injected into the use case layer as
//! `Arc<dyn RoomRegistry>` so session logic stays unit-testable without a
//! live transport (dependency inversion).
//!
//! Each method performs one complete read-modify-write under the
//! implementation's lock and returns a snapshot of the room for
//! broadcasting, so partially mutated state is never observable.

use async_trait::async_trait;

use super::entity::{MoveResult, Player, Room};
use super::error::RegistryError;
use super::value_object::{PlayerId, PlayerName, RoomCode};

/// Effect of removing a player from a room.
#[derive(Debug, Clone)]
pub enum RemovalEffect {
    /// The room still has players; carries the updated snapshot
    RoomUpdated(Room),
    /// The removed player was the last one; the room was destroyed
    RoomDestroyed,
}

/// Process-wide table of rooms keyed by room code.
#[async_trait]
pub trait RoomRegistry: Send + Sync {
    /// Store a newly created room.
    ///
    /// # Errors
    ///
    /// `RegistryError::CodeTaken` when a room already exists under the
    /// code; the caller generates a fresh code and retries.
    async fn insert(&self, room: Room) -> Result<(), RegistryError>;

    /// Snapshot a room by code.
    async fn get(&self, code: &RoomCode) -> Result<Room, RegistryError>;

    /// Codes of all live rooms.
    async fn room_codes(&self) -> Vec<RoomCode>;

    /// Admit a player into a room's lobby. Returns the updated room
    /// snapshot and the admitted player.
    async fn add_player(
        &self,
        code: &RoomCode,
        id: PlayerId,
        name: PlayerName,
    ) -> Result<(Room, Player), RegistryError>;

    /// Mark a player ready. Returns the updated room snapshot.
    async fn set_ready(&self, code: &RoomCode, player: &PlayerId)
        -> Result<Room, RegistryError>;

    /// Start a room's game. Returns the updated room snapshot.
    async fn start_game(&self, code: &RoomCode, player: &PlayerId)
        -> Result<Room, RegistryError>;

    /// Apply a move, running the full chain-reaction simulation to
    /// completion before returning. Returns the settled room snapshot and
    /// the move result.
    async fn apply_move(
        &self,
        code: &RoomCode,
        player: &PlayerId,
        row: usize,
        col: usize,
    ) -> Result<(Room, MoveResult), RegistryError>;

    /// Remove a player from every room they appear in, destroying rooms
    /// left empty. Returns the affected rooms.
    async fn remove_player_everywhere(&self, player: &PlayerId) -> Vec<(RoomCode, RemovalEffect)>;
}
