//! WebSocket protocol DTOs.
//!
//! Inbound client events are one tagged enum; outbound server events are
//! individual message structs carrying their `type` discriminant. Field
//! names are camelCase on the wire.

use serde::{Deserialize, Serialize};

use crate::domain::{Board, GamePhase, Player, Room};

/// Inbound client event, tagged by `type`.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ClientEvent {
    #[serde(rename_all = "camelCase")]
    CreateRoom { player_name: String },
    #[serde(rename_all = "camelCase")]
    JoinRoom { room_id: String, player_name: String },
    #[serde(rename_all = "camelCase")]
    PlayerReady { room_id: String },
    #[serde(rename_all = "camelCase")]
    StartGame { room_id: String },
    #[serde(rename_all = "camelCase")]
    Move {
        room_id: String,
        row: usize,
        col: usize,
    },
}

/// Outbound message type discriminant.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MessageType {
    RoomCreated,
    RoomJoined,
    RoomUpdate,
    GameState,
    GameOver,
    Error,
}

/// Player as seen on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerDto {
    pub id: String,
    pub name: String,
    pub color: u8,
    pub is_ready: bool,
}

impl From<&Player> for PlayerDto {
    fn from(player: &Player) -> Self {
        Self {
            id: player.id.to_string(),
            name: player.name.as_str().to_string(),
            color: player.color.value(),
            is_ready: player.is_ready,
        }
    }
}

/// Room as seen on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomDto {
    pub id: String,
    pub players: Vec<PlayerDto>,
    pub game_started: bool,
    pub current_turn: usize,
}

impl From<&Room> for RoomDto {
    fn from(room: &Room) -> Self {
        Self {
            id: room.code.as_str().to_string(),
            players: room.players.iter().map(PlayerDto::from).collect(),
            game_started: room.phase == GamePhase::InProgress,
            current_turn: room.turn_index,
        }
    }
}

/// One cell on the wire: an atom count plus its owner, or null.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellDto {
    pub atoms: u32,
    pub player_id: Option<String>,
}

/// Board on the wire: a row-major sequence of size * size cells.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardDto {
    pub size: usize,
    pub cells: Vec<CellDto>,
}

impl From<&Board> for BoardDto {
    fn from(board: &Board) -> Self {
        Self {
            size: board.size(),
            cells: board
                .cells()
                .iter()
                .map(|cell| CellDto {
                    atoms: cell.atoms,
                    player_id: cell.owner.map(|id| id.to_string()),
                })
                .collect(),
        }
    }
}

/// Reply to the creator of a room.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomCreatedMessage {
    pub r#type: MessageType,
    pub room: RoomDto,
    pub player: PlayerDto,
}

/// Reply to a player who joined a room.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomJoinedMessage {
    pub r#type: MessageType,
    pub room: RoomDto,
    pub player: PlayerDto,
}

/// Room state broadcast to every connection in the room.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomUpdateMessage {
    pub r#type: MessageType,
    pub room: RoomDto,
}

/// Settled board broadcast after a start or an accepted move.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameStateMessage {
    pub r#type: MessageType,
    pub board: BoardDto,
}

/// Game-over broadcast carrying the winner's player id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameOverMessage {
    pub r#type: MessageType,
    pub winner_id: String,
}

/// Error reply to the requesting connection only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorMessage {
    pub r#type: MessageType,
    pub message: String,
}
