//! UseCase: player disconnect cleanup.

use std::sync::Arc;

use crate::domain::{PlayerId, RemovalEffect, RoomCode, RoomRegistry};

/// Removes a disconnected player from every room they appear in.
pub struct DisconnectPlayerUseCase {
    registry: Arc<dyn RoomRegistry>,
}

impl DisconnectPlayerUseCase {
    pub fn new(registry: Arc<dyn RoomRegistry>) -> Self {
        Self { registry }
    }

    /// Remove the player everywhere. Rooms left empty are destroyed;
    /// surviving rooms come back with their turn pointer already
    /// re-clamped so the caller can broadcast the updated snapshot.
    pub async fn execute(&self, player: &PlayerId) -> Vec<(RoomCode, RemovalEffect)> {
        self.registry.remove_player_everywhere(player).await
    }
}
