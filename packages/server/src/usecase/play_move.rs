//! UseCase: applying a move.

use std::sync::Arc;

use crate::domain::{MoveResult, PlayerId, Room, RoomCode, RoomRegistry};

use super::error::GameActionError;

/// Applies one move, running the chain-reaction simulation to completion.
pub struct PlayMoveUseCase {
    registry: Arc<dyn RoomRegistry>,
}

impl PlayMoveUseCase {
    pub fn new(registry: Arc<dyn RoomRegistry>) -> Self {
        Self { registry }
    }

    /// Apply the move and return the settled room snapshot plus the result.
    ///
    /// The whole read-simulate-write cycle happens under the registry lock,
    /// so no other event interleaves with a partially applied reaction.
    ///
    /// # Errors
    ///
    /// * `GameActionError::Validation` - malformed room code
    /// * `GameActionError::Registry` - unknown room, wrong phase, out of
    ///   turn, or an illegal target cell; the board is unchanged in every
    ///   rejection case
    pub async fn execute(
        &self,
        room_id: &str,
        player: &PlayerId,
        row: usize,
        col: usize,
    ) -> Result<(Room, MoveResult), GameActionError> {
        let code = RoomCode::parse(room_id)?;
        let (room, result) = self.registry.apply_move(&code, player, row, col).await?;
        Ok((room, result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{GameError, GamePhase, GridError, RegistryError};
    use crate::infrastructure::repository::InMemoryRoomRegistry;
    use crate::usecase::{CreateRoomUseCase, JoinRoomUseCase, StartGameUseCase};

    struct Fixture {
        registry: Arc<InMemoryRoomRegistry>,
        usecase: PlayMoveUseCase,
        code: String,
        host: PlayerId,
        bob: PlayerId,
    }

    async fn started_game() -> Fixture {
        let registry = Arc::new(InMemoryRoomRegistry::new());
        let (room, host) = CreateRoomUseCase::new(registry.clone())
            .execute("alice".to_string())
            .await
            .unwrap();
        let (_, bob) = JoinRoomUseCase::new(registry.clone())
            .execute(room.code.as_str(), "bob".to_string())
            .await
            .unwrap();
        StartGameUseCase::new(registry.clone())
            .execute(room.code.as_str(), &host.id)
            .await
            .unwrap();
        Fixture {
            usecase: PlayMoveUseCase::new(registry.clone()),
            registry,
            code: room.code.as_str().to_string(),
            host: host.id,
            bob: bob.id,
        }
    }

    #[tokio::test]
    async fn test_accepted_move_advances_turn() {
        // given:
        let f = started_game().await;

        // when: the host plays a corner
        let (room, result) = f.usecase.execute(&f.code, &f.host, 0, 0).await.unwrap();

        // then: one atom placed, turn handed to bob
        assert_eq!(result, MoveResult::Continued);
        assert_eq!(room.board.cell(0, 0).unwrap().atoms, 1);
        assert_eq!(room.current_player().unwrap().id, f.bob);
    }

    #[tokio::test]
    async fn test_out_of_turn_move_rejected_without_state_change() {
        // given:
        let f = started_game().await;

        // when: bob moves on the host's turn
        let result = f.usecase.execute(&f.code, &f.bob, 0, 0).await;

        // then: rejected, board and turn untouched
        assert!(matches!(
            result,
            Err(GameActionError::Registry(RegistryError::Game(
                GameError::NotYourTurn
            )))
        ));
        let room = f.registry.get(&RoomCode::parse(&f.code).unwrap()).await.unwrap();
        assert_eq!(room.board.total_atoms(), 0);
        assert_eq!(room.turn_index, 0);
    }

    #[tokio::test]
    async fn test_move_into_enemy_cell_rejected() {
        // given: the host owns (0, 0)
        let f = started_game().await;
        f.usecase.execute(&f.code, &f.host, 0, 0).await.unwrap();

        // when: bob targets it
        let result = f.usecase.execute(&f.code, &f.bob, 0, 0).await;

        // then:
        assert!(matches!(
            result,
            Err(GameActionError::Registry(RegistryError::Game(
                GameError::IllegalCell(GridError::CellOwnedByOther { row: 0, col: 0 })
            )))
        ));
    }

    #[tokio::test]
    async fn test_out_of_bounds_move_rejected() {
        // given:
        let f = started_game().await;

        // when:
        let result = f.usecase.execute(&f.code, &f.host, 42, 0).await;

        // then:
        assert!(matches!(
            result,
            Err(GameActionError::Registry(RegistryError::Game(
                GameError::IllegalCell(GridError::OutOfBounds { .. })
            )))
        ));
    }

    #[tokio::test]
    async fn test_winning_move_ends_game() {
        // given: bob's lone edge cell sits at capacity beside the host's corner
        let f = started_game().await;
        f.usecase.execute(&f.code, &f.host, 0, 0).await.unwrap();
        f.usecase.execute(&f.code, &f.bob, 0, 1).await.unwrap();
        f.usecase.execute(&f.code, &f.host, 5, 5).await.unwrap();
        f.usecase.execute(&f.code, &f.bob, 0, 1).await.unwrap();

        // when: the host's corner explodes into it
        let (room, result) = f.usecase.execute(&f.code, &f.host, 0, 0).await.unwrap();

        // then: the host wins and the room is terminal
        assert_eq!(result, MoveResult::Won(f.host));
        assert_eq!(room.phase, GamePhase::Over { winner: f.host });

        // then: further moves are rejected
        let after = f.usecase.execute(&f.code, &f.bob, 9, 9).await;
        assert!(matches!(
            after,
            Err(GameActionError::Registry(RegistryError::Game(
                GameError::GameNotInProgress
            )))
        ));
    }
}
