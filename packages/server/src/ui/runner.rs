//! Router assembly and server entry point.

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::infrastructure::repository::InMemoryRoomRegistry;
use crate::ui::handler::{get_room_detail, get_rooms, health_check, websocket_handler};
use crate::ui::signal::shutdown_signal;
use crate::ui::state::AppState;

/// Build the application router over the given shared state.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/rooms", get(get_rooms))
        .route("/api/rooms/{room_id}", get(get_room_detail))
        .route("/ws", get(websocket_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Run the game server until a shutdown signal arrives.
pub async fn run_server(host: &str, port: u16) -> std::io::Result<()> {
    let registry = Arc::new(InMemoryRoomRegistry::new());
    let state = Arc::new(AppState::new(registry));
    let app = router(state);

    let listener = tokio::net::TcpListener::bind((host, port)).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}
