//! In-memory room registry.
//!
//! A HashMap behind a tokio Mutex is the whole store: rooms do not survive
//! a process restart and there is no sharding across processes. Every trait
//! method takes the lock once, runs the room's domain method to completion
//! and returns a snapshot, so no caller ever observes a half-applied move.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{
    MoveResult, Player, PlayerId, PlayerName, RegistryError, RemovalEffect, Room, RoomCode,
    RoomRegistry,
};

/// HashMap-backed registry implementation.
#[derive(Default)]
pub struct InMemoryRoomRegistry {
    rooms: Mutex<HashMap<RoomCode, Room>>,
}

impl InMemoryRoomRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RoomRegistry for InMemoryRoomRegistry {
    async fn insert(&self, room: Room) -> Result<(), RegistryError> {
        let mut rooms = self.rooms.lock().await;
        if rooms.contains_key(&room.code) {
            return Err(RegistryError::CodeTaken(room.code));
        }
        rooms.insert(room.code.clone(), room);
        Ok(())
    }

    async fn get(&self, code: &RoomCode) -> Result<Room, RegistryError> {
        let rooms = self.rooms.lock().await;
        rooms
            .get(code)
            .cloned()
            .ok_or_else(|| RegistryError::RoomNotFound(code.clone()))
    }

    async fn room_codes(&self) -> Vec<RoomCode> {
        let rooms = self.rooms.lock().await;
        rooms.keys().cloned().collect()
    }

    async fn add_player(
        &self,
        code: &RoomCode,
        id: PlayerId,
        name: PlayerName,
    ) -> Result<(Room, Player), RegistryError> {
        let mut rooms = self.rooms.lock().await;
        let room = rooms
            .get_mut(code)
            .ok_or_else(|| RegistryError::RoomNotFound(code.clone()))?;
        let player = room.admit(id, name)?;
        Ok((room.clone(), player))
    }

    async fn set_ready(
        &self,
        code: &RoomCode,
        player: &PlayerId,
    ) -> Result<Room, RegistryError> {
        let mut rooms = self.rooms.lock().await;
        let room = rooms
            .get_mut(code)
            .ok_or_else(|| RegistryError::RoomNotFound(code.clone()))?;
        room.set_ready(player);
        Ok(room.clone())
    }

    async fn start_game(
        &self,
        code: &RoomCode,
        player: &PlayerId,
    ) -> Result<Room, RegistryError> {
        let mut rooms = self.rooms.lock().await;
        let room = rooms
            .get_mut(code)
            .ok_or_else(|| RegistryError::RoomNotFound(code.clone()))?;
        room.start(player)?;
        Ok(room.clone())
    }

    async fn apply_move(
        &self,
        code: &RoomCode,
        player: &PlayerId,
        row: usize,
        col: usize,
    ) -> Result<(Room, MoveResult), RegistryError> {
        let mut rooms = self.rooms.lock().await;
        let room = rooms
            .get_mut(code)
            .ok_or_else(|| RegistryError::RoomNotFound(code.clone()))?;
        let result = room.play(player, row, col)?;
        Ok((room.clone(), result))
    }

    async fn remove_player_everywhere(&self, player: &PlayerId) -> Vec<(RoomCode, RemovalEffect)> {
        let mut rooms = self.rooms.lock().await;
        let mut affected = Vec::new();
        rooms.retain(|code, room| {
            if !room.remove_player(player) {
                return true;
            }
            if room.is_empty() {
                affected.push((code.clone(), RemovalEffect::RoomDestroyed));
                false
            } else {
                affected.push((code.clone(), RemovalEffect::RoomUpdated(room.clone())));
                true
            }
        });
        affected
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PlayerIdFactory, RoomCodeFactory, Timestamp};

    fn name(s: &str) -> PlayerName {
        PlayerName::new(s.to_string()).unwrap()
    }

    fn make_room(host: PlayerId) -> Room {
        Room::new(
            RoomCodeFactory::generate().unwrap(),
            host,
            name("alice"),
            Timestamp::new(0),
        )
    }

    #[tokio::test]
    async fn test_insert_and_get() {
        // given:
        let registry = InMemoryRoomRegistry::new();
        let host = PlayerIdFactory::generate();
        let room = make_room(host);
        let code = room.code.clone();

        // when:
        registry.insert(room).await.unwrap();
        let fetched = registry.get(&code).await.unwrap();

        // then:
        assert_eq!(fetched.code, code);
        assert_eq!(fetched.players[0].id, host);
    }

    #[tokio::test]
    async fn test_insert_duplicate_code_rejected() {
        // given: a room already stored under a code
        let registry = InMemoryRoomRegistry::new();
        let room = make_room(PlayerIdFactory::generate());
        let code = room.code.clone();
        registry.insert(room.clone()).await.unwrap();

        // when: inserting another room under the same code
        let mut clash = make_room(PlayerIdFactory::generate());
        clash.code = code.clone();
        let result = registry.insert(clash).await;

        // then:
        assert!(matches!(result, Err(RegistryError::CodeTaken(c)) if c == code));
    }

    #[tokio::test]
    async fn test_get_unknown_room() {
        // given:
        let registry = InMemoryRoomRegistry::new();
        let code = RoomCode::parse("ZZZZZZ").unwrap();

        // when / then:
        assert!(matches!(
            registry.get(&code).await,
            Err(RegistryError::RoomNotFound(c)) if c == code
        ));
    }

    #[tokio::test]
    async fn test_add_player_returns_snapshot() {
        // given:
        let registry = InMemoryRoomRegistry::new();
        let room = make_room(PlayerIdFactory::generate());
        let code = room.code.clone();
        registry.insert(room).await.unwrap();

        // when:
        let bob = PlayerIdFactory::generate();
        let (snapshot, player) = registry.add_player(&code, bob, name("bob")).await.unwrap();

        // then:
        assert_eq!(player.id, bob);
        assert_eq!(snapshot.players.len(), 2);
        assert_eq!(snapshot.players[1].id, bob);
    }

    #[tokio::test]
    async fn test_remove_player_everywhere_destroys_empty_room() {
        // given: host alone in one room
        let registry = InMemoryRoomRegistry::new();
        let host = PlayerIdFactory::generate();
        let room = make_room(host);
        let code = room.code.clone();
        registry.insert(room).await.unwrap();

        // when:
        let affected = registry.remove_player_everywhere(&host).await;

        // then: the room was reclaimed
        assert_eq!(affected.len(), 1);
        assert!(matches!(affected[0].1, RemovalEffect::RoomDestroyed));
        assert!(registry.get(&code).await.is_err());
    }

    #[tokio::test]
    async fn test_remove_player_everywhere_updates_survivors() {
        // given: two players in one room
        let registry = InMemoryRoomRegistry::new();
        let host = PlayerIdFactory::generate();
        let room = make_room(host);
        let code = room.code.clone();
        registry.insert(room).await.unwrap();
        let bob = PlayerIdFactory::generate();
        registry.add_player(&code, bob, name("bob")).await.unwrap();

        // when: bob disconnects
        let affected = registry.remove_player_everywhere(&bob).await;

        // then: the room survives with the host only
        assert_eq!(affected.len(), 1);
        match &affected[0].1 {
            RemovalEffect::RoomUpdated(snapshot) => {
                assert_eq!(snapshot.players.len(), 1);
                assert_eq!(snapshot.players[0].id, host);
            }
            RemovalEffect::RoomDestroyed => panic!("room should not be destroyed"),
        }
        assert!(registry.get(&code).await.is_ok());
    }

    #[tokio::test]
    async fn test_remove_unknown_player_touches_nothing() {
        // given:
        let registry = InMemoryRoomRegistry::new();
        let room = make_room(PlayerIdFactory::generate());
        registry.insert(room).await.unwrap();

        // when:
        let affected = registry
            .remove_player_everywhere(&PlayerIdFactory::generate())
            .await;

        // then:
        assert!(affected.is_empty());
        assert_eq!(registry.room_codes().await.len(), 1);
    }
}
