//! Use case layer.
//!
//! One use case per inbound protocol event. Called by the UI layer,
//! operates on the domain layer through the injected `RoomRegistry`.

pub mod create_room;
pub mod disconnect_player;
pub mod error;
pub mod join_room;
pub mod play_move;
pub mod ready_player;
pub mod start_game;

pub use create_room::CreateRoomUseCase;
pub use disconnect_player::DisconnectPlayerUseCase;
pub use error::{CreateRoomError, GameActionError};
pub use join_room::JoinRoomUseCase;
pub use play_move::PlayMoveUseCase;
pub use ready_player::ReadyPlayerUseCase;
pub use start_game::StartGameUseCase;
