//! HTTP API endpoint handlers.
//!
//! A small inspection surface next to the WebSocket endpoint: health
//! check plus read-only room listings used by integration tests and
//! debugging.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    domain::{GamePhase, RoomCode},
    infrastructure::dto::http::{PlayerDetailDto, RoomDetailDto, RoomSummaryDto},
    ui::state::AppState,
};

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// Get the list of live rooms
pub async fn get_rooms(State(state): State<Arc<AppState>>) -> Json<Vec<RoomSummaryDto>> {
    let mut summaries = Vec::new();
    for code in state.registry.room_codes().await {
        // A room can be reclaimed between listing and lookup; skip it.
        let Ok(room) = state.registry.get(&code).await else {
            continue;
        };
        summaries.push(RoomSummaryDto {
            id: room.code.as_str().to_string(),
            players: room
                .players
                .iter()
                .map(|p| p.name.as_str().to_string())
                .collect(),
            game_started: room.phase == GamePhase::InProgress,
            created_at: room.created_at.value(),
        });
    }
    summaries.sort_by(|a, b| a.id.cmp(&b.id));
    Json(summaries)
}

/// Get room detail by code
pub async fn get_room_detail(
    State(state): State<Arc<AppState>>,
    Path(room_id): Path<String>,
) -> Result<Json<RoomDetailDto>, StatusCode> {
    let code = RoomCode::parse(&room_id).map_err(|_| StatusCode::NOT_FOUND)?;
    let room = state
        .registry
        .get(&code)
        .await
        .map_err(|_| StatusCode::NOT_FOUND)?;

    Ok(Json(RoomDetailDto {
        id: room.code.as_str().to_string(),
        players: room
            .players
            .iter()
            .map(|p| PlayerDetailDto {
                id: p.id.to_string(),
                name: p.name.as_str().to_string(),
                color: p.color.value(),
                is_ready: p.is_ready,
            })
            .collect(),
        game_started: room.phase == GamePhase::InProgress,
        current_turn: room.turn_index,
        created_at: room.created_at.value(),
    }))
}
