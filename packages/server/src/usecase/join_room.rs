//! UseCase: joining an existing room.

use std::sync::Arc;

use crate::domain::{Player, PlayerIdFactory, PlayerName, Room, RoomCode, RoomRegistry};

use super::error::GameActionError;

/// Admits a player into a room's lobby.
pub struct JoinRoomUseCase {
    registry: Arc<dyn RoomRegistry>,
}

impl JoinRoomUseCase {
    pub fn new(registry: Arc<dyn RoomRegistry>) -> Self {
        Self { registry }
    }

    /// Validate the code and name, then append the player to the roster.
    ///
    /// The room code is case-normalized; join order is preserved as turn
    /// order and the joiner receives the smallest unused color ordinal.
    ///
    /// # Errors
    ///
    /// * `GameActionError::Validation` - malformed code or name
    /// * `GameActionError::Registry` - unknown room, room full, or the
    ///   game already started
    pub async fn execute(
        &self,
        room_id: &str,
        player_name: String,
    ) -> Result<(Room, Player), GameActionError> {
        let code = RoomCode::parse(room_id)?;
        let name = PlayerName::new(player_name)?;
        let id = PlayerIdFactory::generate();
        let (room, player) = self.registry.add_player(&code, id, name).await?;
        Ok((room, player))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{GameError, RegistryError};
    use crate::infrastructure::repository::InMemoryRoomRegistry;
    use crate::usecase::CreateRoomUseCase;

    async fn setup() -> (Arc<InMemoryRoomRegistry>, Room) {
        let registry = Arc::new(InMemoryRoomRegistry::new());
        let (room, _) = CreateRoomUseCase::new(registry.clone())
            .execute("alice".to_string())
            .await
            .unwrap();
        (registry, room)
    }

    #[tokio::test]
    async fn test_join_room_success() {
        // given:
        let (registry, room) = setup().await;
        let usecase = JoinRoomUseCase::new(registry.clone());

        // when:
        let (snapshot, player) = usecase
            .execute(room.code.as_str(), "bob".to_string())
            .await
            .unwrap();

        // then: appended after the host with the next color
        assert_eq!(snapshot.players.len(), 2);
        assert_eq!(snapshot.players[1].id, player.id);
        assert_eq!(player.color.value(), 1);
        assert!(!player.is_ready);
    }

    #[tokio::test]
    async fn test_join_room_code_is_case_normalized() {
        // given:
        let (registry, room) = setup().await;
        let usecase = JoinRoomUseCase::new(registry);

        // when: joining with the code typed in lowercase
        let lowered = room.code.as_str().to_ascii_lowercase();
        let result = usecase.execute(&lowered, "bob".to_string()).await;

        // then:
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_join_unknown_room() {
        // given:
        let (registry, _) = setup().await;
        let usecase = JoinRoomUseCase::new(registry);

        // when:
        let result = usecase.execute("ZZZZZZ", "bob".to_string()).await;

        // then:
        assert!(matches!(
            result,
            Err(GameActionError::Registry(RegistryError::RoomNotFound(_)))
        ));
    }

    #[tokio::test]
    async fn test_join_full_room() {
        // given: a room filled to its eight-player capacity
        let (registry, room) = setup().await;
        let usecase = JoinRoomUseCase::new(registry.clone());
        for i in 0..7 {
            usecase
                .execute(room.code.as_str(), format!("p{i}"))
                .await
                .unwrap();
        }

        // when:
        let result = usecase.execute(room.code.as_str(), "late".to_string()).await;

        // then:
        assert!(matches!(
            result,
            Err(GameActionError::Registry(RegistryError::Game(
                GameError::RoomFull { capacity: 8 }
            )))
        ));
    }

    #[tokio::test]
    async fn test_join_invalid_name_rejected_before_mutation() {
        // given:
        let (registry, room) = setup().await;
        let usecase = JoinRoomUseCase::new(registry.clone());

        // when:
        let result = usecase.execute(room.code.as_str(), "x".to_string()).await;

        // then: validation failed and the roster is unchanged
        assert!(matches!(result, Err(GameActionError::Validation(_))));
        assert_eq!(registry.get(&room.code).await.unwrap().players.len(), 1);
    }
}
