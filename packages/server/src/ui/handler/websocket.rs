//! WebSocket connection gateway.
//!
//! Assigns each connection a server-side id, routes inbound protocol
//! events to the use case layer and fans resulting state out to every
//! connection bound to the affected room. Events are handled to
//! completion one at a time per connection, and each room mutation runs
//! under the registry lock, so a partially applied chain reaction is
//! never broadcast.

use std::sync::Arc;

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::IntoResponse,
};
use futures_util::{sink::SinkExt, stream::StreamExt};
use tokio::sync::mpsc;

use crate::{
    common::time::unix_timestamp_millis,
    domain::{GameError, MoveResult, PlayerId, RegistryError, RemovalEffect},
    infrastructure::dto::websocket::{
        BoardDto, ClientEvent, ErrorMessage, GameOverMessage, GameStateMessage, MessageType,
        PlayerDto, RoomCreatedMessage, RoomDto, RoomJoinedMessage, RoomUpdateMessage,
    },
    ui::state::{AppState, ClientInfo},
    usecase::{
        error::GameActionError, CreateRoomUseCase, DisconnectPlayerUseCase, JoinRoomUseCase,
        PlayMoveUseCase, ReadyPlayerUseCase, StartGameUseCase,
    },
};

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(|socket| handle_socket(socket, state))
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let connection_id = uuid::Uuid::new_v4().to_string();

    // Register the connection's outbound channel before anything can be
    // broadcast to it.
    let (tx, mut rx) = mpsc::unbounded_channel();
    {
        let mut connections = state.connections.lock().await;
        connections.insert(
            connection_id.clone(),
            ClientInfo {
                sender: tx,
                connected_at: unix_timestamp_millis(),
                binding: None,
            },
        );
    }
    tracing::info!("Connection '{}' established", connection_id);

    let (mut sender, mut receiver) = socket.split();

    let recv_state = state.clone();
    let recv_connection_id = connection_id.clone();
    let mut recv_task = tokio::spawn(async move {
        while let Some(msg) = receiver.next().await {
            let msg = match msg {
                Ok(msg) => msg,
                Err(e) => {
                    tracing::error!("WebSocket error: {}", e);
                    break;
                }
            };

            match msg {
                Message::Text(text) => match serde_json::from_str::<ClientEvent>(&text) {
                    Ok(event) => handle_event(&recv_state, &recv_connection_id, event).await,
                    Err(e) => {
                        tracing::warn!(
                            "Dropping malformed event from '{}': {}",
                            recv_connection_id,
                            e
                        );
                    }
                },
                Message::Close(_) => {
                    tracing::info!("Connection '{}' requested close", recv_connection_id);
                    break;
                }
                _ => {}
            }
        }
    });

    let mut send_task = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if sender.send(Message::Text(msg.into())).await.is_err() {
                break;
            }
        }
    });

    // If either task completes, abort the other
    tokio::select! {
        _ = &mut recv_task => send_task.abort(),
        _ = &mut send_task => recv_task.abort(),
    };

    handle_disconnect(&state, &connection_id).await;
}

/// Route one inbound event to its use case and fan out the results.
async fn handle_event(state: &Arc<AppState>, connection_id: &str, event: ClientEvent) {
    match event {
        ClientEvent::CreateRoom { player_name } => {
            let usecase = CreateRoomUseCase::new(state.registry.clone());
            match usecase.execute(player_name).await {
                Ok((room, host)) => {
                    let previous = state.binding_of(connection_id).await;
                    state
                        .bind(connection_id, room.code.clone(), host.id)
                        .await;
                    if let Some(previous) = previous {
                        release_player(state, &previous.player).await;
                    }
                    tracing::info!("Connection '{}' created room {}", connection_id, room.code);
                    state
                        .send_to(
                            connection_id,
                            &RoomCreatedMessage {
                                r#type: MessageType::RoomCreated,
                                room: RoomDto::from(&room),
                                player: PlayerDto::from(&host),
                            },
                        )
                        .await;
                }
                Err(e) => {
                    send_error(state, connection_id, e.to_string()).await;
                }
            }
        }

        ClientEvent::JoinRoom {
            room_id,
            player_name,
        } => {
            let usecase = JoinRoomUseCase::new(state.registry.clone());
            match usecase.execute(&room_id, player_name).await {
                Ok((room, player)) => {
                    let previous = state.binding_of(connection_id).await;
                    state
                        .bind(connection_id, room.code.clone(), player.id)
                        .await;
                    if let Some(previous) = previous {
                        release_player(state, &previous.player).await;
                    }
                    tracing::info!("Connection '{}' joined room {}", connection_id, room.code);
                    state
                        .send_to(
                            connection_id,
                            &RoomJoinedMessage {
                                r#type: MessageType::RoomJoined,
                                room: RoomDto::from(&room),
                                player: PlayerDto::from(&player),
                            },
                        )
                        .await;
                    broadcast_room_update(state, &room).await;
                }
                Err(e) => {
                    reply_or_drop(state, connection_id, "joinRoom", e).await;
                }
            }
        }

        ClientEvent::PlayerReady { room_id } => {
            let Some(binding) = state.binding_of(connection_id).await else {
                tracing::debug!("playerReady from unbound connection '{}'", connection_id);
                return;
            };
            let usecase = ReadyPlayerUseCase::new(state.registry.clone());
            match usecase.execute(&room_id, &binding.player).await {
                Ok(room) => broadcast_room_update(state, &room).await,
                Err(e) => reply_or_drop(state, connection_id, "playerReady", e).await,
            }
        }

        ClientEvent::StartGame { room_id } => {
            let Some(binding) = state.binding_of(connection_id).await else {
                tracing::debug!("startGame from unbound connection '{}'", connection_id);
                return;
            };
            let usecase = StartGameUseCase::new(state.registry.clone());
            match usecase.execute(&room_id, &binding.player).await {
                Ok(room) => {
                    tracing::info!("Game started in room {}", room.code);
                    broadcast_room_update(state, &room).await;
                    state
                        .broadcast_to_room(
                            &room.code,
                            &GameStateMessage {
                                r#type: MessageType::GameState,
                                board: BoardDto::from(&room.board),
                            },
                        )
                        .await;
                }
                Err(e) => reply_or_drop(state, connection_id, "startGame", e).await,
            }
        }

        ClientEvent::Move { room_id, row, col } => {
            let Some(binding) = state.binding_of(connection_id).await else {
                tracing::debug!("move from unbound connection '{}'", connection_id);
                return;
            };
            let usecase = PlayMoveUseCase::new(state.registry.clone());
            match usecase.execute(&room_id, &binding.player, row, col).await {
                Ok((room, MoveResult::Continued)) => {
                    broadcast_room_update(state, &room).await;
                    state
                        .broadcast_to_room(
                            &room.code,
                            &GameStateMessage {
                                r#type: MessageType::GameState,
                                board: BoardDto::from(&room.board),
                            },
                        )
                        .await;
                }
                Ok((room, MoveResult::Won(winner))) => {
                    tracing::info!("Game over in room {}, winner {}", room.code, winner);
                    state
                        .broadcast_to_room(
                            &room.code,
                            &GameOverMessage {
                                r#type: MessageType::GameOver,
                                winner_id: winner.to_string(),
                            },
                        )
                        .await;
                }
                Err(e) => reply_or_drop(state, connection_id, "move", e).await,
            }
        }
    }
}

/// Disconnect cleanup: unregister the connection, remove its player from
/// every room and notify the survivors.
async fn handle_disconnect(state: &Arc<AppState>, connection_id: &str) {
    let info = {
        let mut connections = state.connections.lock().await;
        connections.remove(connection_id)
    };
    let Some(info) = info else {
        return;
    };
    tracing::info!(
        "Connection '{}' disconnected after {}ms",
        connection_id,
        unix_timestamp_millis() - info.connected_at
    );

    if let Some(binding) = info.binding {
        release_player(state, &binding.player).await;
    }
}

/// Remove a player from every room and notify the survivors.
///
/// Runs when the owning connection goes away and also when it binds
/// itself to a different room via a second create or join, so a
/// connection never leaves a ghost player behind in its previous room.
async fn release_player(state: &Arc<AppState>, player: &PlayerId) {
    let usecase = DisconnectPlayerUseCase::new(state.registry.clone());
    for (code, effect) in usecase.execute(player).await {
        match effect {
            RemovalEffect::RoomUpdated(room) => broadcast_room_update(state, &room).await,
            RemovalEffect::RoomDestroyed => {
                tracing::info!("Room {} emptied and reclaimed", code);
            }
        }
    }
}

async fn broadcast_room_update(state: &Arc<AppState>, room: &crate::domain::Room) {
    state
        .broadcast_to_room(
            &room.code,
            &RoomUpdateMessage {
                r#type: MessageType::RoomUpdate,
                room: RoomDto::from(room),
            },
        )
        .await;
}

async fn send_error(state: &Arc<AppState>, connection_id: &str, message: String) {
    state
        .send_to(
            connection_id,
            &ErrorMessage {
                r#type: MessageType::Error,
                message,
            },
        )
        .await;
}

/// Map a rejected action to an `error` reply or a silent drop.
///
/// Validation failures and lobby-level rejections (unknown room, full
/// room, join after start) are surfaced to the requester; turn and cell
/// legality violations are dropped without any reply or broadcast.
async fn reply_or_drop(
    state: &Arc<AppState>,
    connection_id: &str,
    event_name: &str,
    err: GameActionError,
) {
    let reply = match &err {
        GameActionError::Validation(e) => Some(e.to_string()),
        GameActionError::Registry(RegistryError::RoomNotFound(_)) => {
            Some("Room not found".to_string())
        }
        GameActionError::Registry(RegistryError::CodeTaken(_)) => None,
        GameActionError::Registry(RegistryError::Game(game_err)) => match game_err {
            GameError::RoomFull { .. } => Some("Room is full".to_string()),
            GameError::GameAlreadyStarted => Some(game_err.to_string()),
            GameError::NotYourTurn
            | GameError::IllegalCell(_)
            | GameError::GameNotInProgress
            | GameError::NotHost => None,
        },
    };

    match reply {
        Some(message) => {
            tracing::debug!("Rejected {} from '{}': {}", event_name, connection_id, err);
            send_error(state, connection_id, message).await;
        }
        None => {
            tracing::debug!("Ignored {} from '{}': {}", event_name, connection_id, err);
        }
    }
}
