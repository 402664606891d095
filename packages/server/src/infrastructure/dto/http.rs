//! HTTP API response DTOs for the room inspection endpoints.

use serde::{Deserialize, Serialize};

/// Room summary for the list endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomSummaryDto {
    pub id: String,
    pub players: Vec<String>,
    pub game_started: bool,
    pub created_at: i64, // Unix millis
}

/// Room detail for the detail endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomDetailDto {
    pub id: String,
    pub players: Vec<PlayerDetailDto>,
    pub game_started: bool,
    pub current_turn: usize,
    pub created_at: i64, // Unix millis
}

/// Player detail for the room detail endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerDetailDto {
    pub id: String,
    pub name: String,
    pub color: u8,
    pub is_ready: bool,
}
