//! UseCase: room creation.

use std::sync::Arc;

use crate::common::time::unix_timestamp_millis;
use crate::domain::{
    Player, PlayerIdFactory, PlayerName, RegistryError, Room, RoomCodeFactory, RoomRegistry,
    Timestamp,
};

use super::error::CreateRoomError;

/// Attempts at a unique room code before giving up. Collisions are
/// vanishingly rare in a 36^6 code space, so hitting this limit means the
/// generator is broken rather than the registry being full.
const MAX_CODE_ATTEMPTS: usize = 16;

/// Creates a room with the requester as its host.
pub struct CreateRoomUseCase {
    registry: Arc<dyn RoomRegistry>,
}

impl CreateRoomUseCase {
    pub fn new(registry: Arc<dyn RoomRegistry>) -> Self {
        Self { registry }
    }

    /// Validate the host's name, allocate a unique room code and store the
    /// new room.
    ///
    /// # Returns
    ///
    /// The created room snapshot and the host player (carrying the stable
    /// player id issued here).
    ///
    /// # Errors
    ///
    /// * `CreateRoomError::Validation` - name outside the 2..=15 bounds
    /// * `CreateRoomError::CodeSpaceExhausted` - repeated code collisions
    pub async fn execute(&self, player_name: String) -> Result<(Room, Player), CreateRoomError> {
        let name = PlayerName::new(player_name)?;
        let host_id = PlayerIdFactory::generate();

        for _ in 0..MAX_CODE_ATTEMPTS {
            let code = RoomCodeFactory::generate()?;
            let room = Room::new(
                code,
                host_id,
                name.clone(),
                Timestamp::new(unix_timestamp_millis()),
            );
            match self.registry.insert(room.clone()).await {
                Ok(()) => {
                    let host = room.players[0].clone();
                    return Ok((room, host));
                }
                Err(RegistryError::CodeTaken(_)) => continue,
                Err(_) => break,
            }
        }
        Err(CreateRoomError::CodeSpaceExhausted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::GamePhase;
    use crate::infrastructure::repository::InMemoryRoomRegistry;

    #[tokio::test]
    async fn test_create_room_success() {
        // given:
        let registry = Arc::new(InMemoryRoomRegistry::new());
        let usecase = CreateRoomUseCase::new(registry.clone());

        // when:
        let (room, host) = usecase.execute("alice".to_string()).await.unwrap();

        // then: a lobby room exists with the host as sole player
        assert_eq!(room.phase, GamePhase::Lobby);
        assert_eq!(room.players.len(), 1);
        assert_eq!(room.players[0].id, host.id);
        assert_eq!(host.name.as_str(), "alice");
        assert_eq!(host.color.value(), 0);

        // then: it is retrievable from the registry
        let stored = registry.get(&room.code).await.unwrap();
        assert_eq!(stored.players[0].id, host.id);
    }

    #[tokio::test]
    async fn test_create_room_invalid_name_rejected() {
        // given:
        let registry = Arc::new(InMemoryRoomRegistry::new());
        let usecase = CreateRoomUseCase::new(registry.clone());

        // when: a one-character name
        let result = usecase.execute("a".to_string()).await;

        // then: rejected before any room mutation
        assert!(matches!(result, Err(CreateRoomError::Validation(_))));
        assert!(registry.room_codes().await.is_empty());
    }

    #[tokio::test]
    async fn test_create_room_codes_are_unique() {
        // given:
        let registry = Arc::new(InMemoryRoomRegistry::new());
        let usecase = CreateRoomUseCase::new(registry.clone());

        // when: creating several rooms
        let (room1, _) = usecase.execute("alice".to_string()).await.unwrap();
        let (room2, _) = usecase.execute("bob".to_string()).await.unwrap();

        // then:
        assert_ne!(room1.code, room2.code);
        assert_eq!(registry.room_codes().await.len(), 2);
    }
}
