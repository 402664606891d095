//! Server state and connection management.
//!
//! The gateway holds only a non-owning back-reference per connection: the
//! room code and stable player id it is bound to. Rooms themselves are
//! owned by the registry.

use serde::Serialize;
use std::{collections::HashMap, sync::Arc};
use tokio::sync::{mpsc, Mutex};

use crate::domain::{PlayerId, RoomCode, RoomRegistry};

/// (room, player) pair a connection is currently bound to.
#[derive(Debug, Clone)]
pub struct Binding {
    pub room: RoomCode,
    pub player: PlayerId,
}

/// Per-connection bookkeeping.
pub struct ClientInfo {
    /// Outbound message channel feeding this connection's send task
    pub sender: mpsc::UnboundedSender<String>,
    /// Unix timestamp (milliseconds) when the connection was established
    pub connected_at: i64,
    /// Room/player binding, set once the connection creates or joins a room
    pub binding: Option<Binding>,
}

/// Shared application state.
pub struct AppState {
    /// Room registry (injected, never ambient)
    pub registry: Arc<dyn RoomRegistry>,
    /// Live connections keyed by server-assigned connection id
    pub connections: Arc<Mutex<HashMap<String, ClientInfo>>>,
}

impl AppState {
    pub fn new(registry: Arc<dyn RoomRegistry>) -> Self {
        Self {
            registry,
            connections: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Serialize a message and send it to one connection.
    pub async fn send_to<T: Serialize>(&self, connection_id: &str, message: &T) {
        let json = match serde_json::to_string(message) {
            Ok(json) => json,
            Err(e) => {
                tracing::error!("Failed to serialize outbound message: {}", e);
                return;
            }
        };
        let connections = self.connections.lock().await;
        if let Some(info) = connections.get(connection_id)
            && info.sender.send(json).is_err()
        {
            tracing::warn!("Failed to send message to connection '{}'", connection_id);
        }
    }

    /// Serialize a message and send it to every connection bound to a room.
    pub async fn broadcast_to_room<T: Serialize>(&self, room: &RoomCode, message: &T) {
        let json = match serde_json::to_string(message) {
            Ok(json) => json,
            Err(e) => {
                tracing::error!("Failed to serialize broadcast message: {}", e);
                return;
            }
        };
        let connections = self.connections.lock().await;
        for (id, info) in connections.iter() {
            if let Some(binding) = &info.binding
                && &binding.room == room
                && info.sender.send(json.clone()).is_err()
            {
                tracing::warn!("Failed to broadcast to connection '{}'", id);
            }
        }
    }

    /// Bind a connection to a (room, player) pair after create/join.
    pub async fn bind(&self, connection_id: &str, room: RoomCode, player: PlayerId) {
        let mut connections = self.connections.lock().await;
        if let Some(info) = connections.get_mut(connection_id) {
            info.binding = Some(Binding { room, player });
        }
    }

    /// Current binding of a connection, if any.
    pub async fn binding_of(&self, connection_id: &str) -> Option<Binding> {
        let connections = self.connections.lock().await;
        connections
            .get(connection_id)
            .and_then(|info| info.binding.clone())
    }
}
