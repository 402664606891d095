//! UseCase: lobby readiness.

use std::sync::Arc;

use crate::domain::{PlayerId, Room, RoomCode, RoomRegistry};

use super::error::GameActionError;

/// Marks a player ready in a room's lobby.
pub struct ReadyPlayerUseCase {
    registry: Arc<dyn RoomRegistry>,
}

impl ReadyPlayerUseCase {
    pub fn new(registry: Arc<dyn RoomRegistry>) -> Self {
        Self { registry }
    }

    /// Mark the player ready and return the updated room snapshot.
    ///
    /// Readying a player who is not in the room is a no-op; the snapshot
    /// is still returned so the caller can broadcast consistently.
    ///
    /// # Errors
    ///
    /// * `GameActionError::Validation` - malformed room code
    /// * `GameActionError::Registry` - unknown room
    pub async fn execute(
        &self,
        room_id: &str,
        player: &PlayerId,
    ) -> Result<Room, GameActionError> {
        let code = RoomCode::parse(room_id)?;
        let room = self.registry.set_ready(&code, player).await?;
        Ok(room)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PlayerIdFactory;
    use crate::infrastructure::repository::InMemoryRoomRegistry;
    use crate::usecase::CreateRoomUseCase;

    #[tokio::test]
    async fn test_ready_player_success() {
        // given:
        let registry = Arc::new(InMemoryRoomRegistry::new());
        let (room, host) = CreateRoomUseCase::new(registry.clone())
            .execute("alice".to_string())
            .await
            .unwrap();
        let usecase = ReadyPlayerUseCase::new(registry);

        // when:
        let snapshot = usecase.execute(room.code.as_str(), &host.id).await.unwrap();

        // then:
        assert!(snapshot.players[0].is_ready);
    }

    #[tokio::test]
    async fn test_ready_unknown_player_is_noop() {
        // given:
        let registry = Arc::new(InMemoryRoomRegistry::new());
        let (room, _) = CreateRoomUseCase::new(registry.clone())
            .execute("alice".to_string())
            .await
            .unwrap();
        let usecase = ReadyPlayerUseCase::new(registry);

        // when: readying a player who never joined
        let stranger = PlayerIdFactory::generate();
        let snapshot = usecase
            .execute(room.code.as_str(), &stranger)
            .await
            .unwrap();

        // then: roster untouched
        assert_eq!(snapshot.players.len(), 1);
        assert!(!snapshot.players[0].is_ready);
    }

    #[tokio::test]
    async fn test_ready_unknown_room_fails() {
        // given:
        let registry = Arc::new(InMemoryRoomRegistry::new());
        let usecase = ReadyPlayerUseCase::new(registry);

        // when / then:
        let player = PlayerIdFactory::generate();
        assert!(usecase.execute("ZZZZZZ", &player).await.is_err());
    }
}
