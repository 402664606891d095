//! UseCase: starting a game.

use std::sync::Arc;

use crate::domain::{PlayerId, Room, RoomCode, RoomRegistry};

use super::error::GameActionError;

/// Transitions a room from the lobby into an in-progress game.
pub struct StartGameUseCase {
    registry: Arc<dyn RoomRegistry>,
}

impl StartGameUseCase {
    pub fn new(registry: Arc<dyn RoomRegistry>) -> Self {
        Self { registry }
    }

    /// Start the game and return the updated room snapshot.
    ///
    /// Only the host (first player in join order) may start; the rule is
    /// enforced here at the session boundary rather than trusted to the
    /// client.
    ///
    /// # Errors
    ///
    /// * `GameActionError::Validation` - malformed room code
    /// * `GameActionError::Registry` - unknown room, non-host requester or
    ///   an already-started game
    pub async fn execute(
        &self,
        room_id: &str,
        player: &PlayerId,
    ) -> Result<Room, GameActionError> {
        let code = RoomCode::parse(room_id)?;
        let room = self.registry.start_game(&code, player).await?;
        Ok(room)
    }
}
