//! Core domain models: players and the per-room game state machine.

use serde::{Deserialize, Serialize};

use super::{
    error::GameError,
    grid::Board,
    value_object::{ColorIndex, PlayerId, PlayerName, RoomCode, Timestamp, COLOR_COUNT},
};

/// Maximum number of players in one room
pub const ROOM_CAPACITY: usize = 8;

/// Represents a player inside a room
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Stable player identifier, issued at join time
    pub id: PlayerId,
    /// Display name
    pub name: PlayerName,
    /// Color ordinal assigned at join time
    pub color: ColorIndex,
    /// Lobby readiness flag
    pub is_ready: bool,
}

impl Player {
    fn new(id: PlayerId, name: PlayerName, color: ColorIndex) -> Self {
        Self {
            id,
            name,
            color,
            is_ready: false,
        }
    }
}

/// Room lifecycle: lobby, in progress, or terminally over.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Accepting joins and ready signals
    Lobby,
    /// Exactly one move is processed at a time
    InProgress,
    /// Terminal; the room stays addressable until emptied but accepts no
    /// further moves
    Over { winner: PlayerId },
}

/// Result of an accepted move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveResult {
    /// Play continues; the turn pointer advanced
    Continued,
    /// The board reached a single owner; the game is over
    Won(PlayerId),
}

/// A game room: roster, turn state and board.
///
/// Join order is turn order. All mutation happens through the methods
/// below; the registry never reaches into the fields directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    /// Human-shareable room code
    pub code: RoomCode,
    /// Players in join order
    pub players: Vec<Player>,
    /// Lifecycle phase
    pub phase: GamePhase,
    /// Index into `players` of whose move is currently legal
    pub turn_index: usize,
    /// Accepted moves since the game started; guards win detection so a
    /// move before anyone else has placed atoms is not misread as a win
    pub moves_played: usize,
    /// The grid
    pub board: Board,
    /// Timestamp when the room was created
    pub created_at: Timestamp,
}

impl Room {
    /// Create a new room in the lobby phase with its host as the first
    /// player. The host receives color ordinal 0.
    pub fn new(code: RoomCode, host_id: PlayerId, host_name: PlayerName, created_at: Timestamp) -> Self {
        Self {
            code,
            players: vec![Player::new(host_id, host_name, ColorIndex::ZERO)],
            phase: GamePhase::Lobby,
            turn_index: 0,
            moves_played: 0,
            board: Board::default(),
            created_at,
        }
    }

    /// The player whose move is currently legal, if any.
    pub fn current_player(&self) -> Option<&Player> {
        self.players.get(self.turn_index)
    }

    /// Whether the given player is the host (first in join order).
    pub fn is_host(&self, player_id: &PlayerId) -> bool {
        self.players.first().is_some_and(|p| &p.id == player_id)
    }

    /// Look up a player by id.
    pub fn get_player(&self, player_id: &PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| &p.id == player_id)
    }

    /// Smallest color ordinal not taken by a current player.
    fn next_free_color(&self) -> Option<ColorIndex> {
        (0..COLOR_COUNT)
            .find(|i| !self.players.iter().any(|p| p.color.value() == *i))
            .and_then(ColorIndex::new)
    }

    /// Admit a new player into the lobby.
    ///
    /// Join order is preserved as turn order and the joiner receives the
    /// smallest unused color ordinal.
    ///
    /// # Errors
    ///
    /// * `GameError::GameAlreadyStarted` - the room left the lobby phase
    /// * `GameError::RoomFull` - eight players already present
    pub fn admit(&mut self, id: PlayerId, name: PlayerName) -> Result<Player, GameError> {
        if self.phase != GamePhase::Lobby {
            return Err(GameError::GameAlreadyStarted);
        }
        if self.players.len() >= ROOM_CAPACITY {
            return Err(GameError::RoomFull {
                capacity: ROOM_CAPACITY,
            });
        }
        // Roster below capacity always leaves a free ordinal.
        let color = self.next_free_color().ok_or(GameError::RoomFull {
            capacity: ROOM_CAPACITY,
        })?;
        let player = Player::new(id, name, color);
        self.players.push(player.clone());
        Ok(player)
    }

    /// Mark a player ready. No-op when the player is not in the room.
    pub fn set_ready(&mut self, player_id: &PlayerId) {
        if let Some(player) = self.players.iter_mut().find(|p| &p.id == player_id) {
            player.is_ready = true;
        }
    }

    /// Start the game, transitioning the lobby to in-progress.
    ///
    /// Host-only: the informal "first player starts" rule is enforced here
    /// at the session boundary, not just in the client. Resets the board
    /// and turn state.
    ///
    /// # Errors
    ///
    /// * `GameError::NotHost` - requested by a player other than the host
    /// * `GameError::GameAlreadyStarted` - the room already left the lobby
    pub fn start(&mut self, player_id: &PlayerId) -> Result<(), GameError> {
        if self.phase != GamePhase::Lobby {
            return Err(GameError::GameAlreadyStarted);
        }
        if !self.is_host(player_id) {
            return Err(GameError::NotHost);
        }
        self.board = Board::default();
        self.turn_index = 0;
        self.moves_played = 0;
        self.phase = GamePhase::InProgress;
        Ok(())
    }

    /// Apply a move for the given player.
    ///
    /// The turn check is the sole admission control: a move arriving out of
    /// turn is rejected, never queued. On acceptance the settled board
    /// replaces the current one; the game ends when a single owner remains
    /// after every player has had at least one move, otherwise the turn
    /// pointer advances by one modulo the roster size.
    ///
    /// # Errors
    ///
    /// * `GameError::GameNotInProgress` - room is in the lobby or over
    /// * `GameError::NotYourTurn` - `player_id` does not hold the turn
    /// * `GameError::IllegalCell` - out of bounds or owned by another player
    pub fn play(
        &mut self,
        player_id: &PlayerId,
        row: usize,
        col: usize,
    ) -> Result<MoveResult, GameError> {
        if self.phase != GamePhase::InProgress {
            return Err(GameError::GameNotInProgress);
        }
        let current = self.current_player().ok_or(GameError::GameNotInProgress)?;
        if &current.id != player_id {
            return Err(GameError::NotYourTurn);
        }

        let (board, outcome) = self.board.apply_move(row, col, *player_id)?;
        self.board = board;
        self.moves_played += 1;

        // A lone owner on the opening moves just means nobody else has
        // placed yet; require a full round before calling a winner.
        if outcome.owners.len() == 1 && self.moves_played >= self.players.len() {
            let winner = outcome.owners[0];
            self.phase = GamePhase::Over { winner };
            return Ok(MoveResult::Won(winner));
        }

        self.turn_index = (self.turn_index + 1) % self.players.len();
        Ok(MoveResult::Continued)
    }

    /// Remove a player from the roster, e.g. on disconnect.
    ///
    /// Returns true when the player was present. The turn pointer is
    /// re-clamped into the remaining range afterwards so it never indexes
    /// out of bounds.
    pub fn remove_player(&mut self, player_id: &PlayerId) -> bool {
        let before = self.players.len();
        self.players.retain(|p| &p.id != player_id);
        let removed = self.players.len() < before;
        if removed && !self.players.is_empty() {
            self.turn_index %= self.players.len();
        }
        removed
    }

    /// Whether the room has no players left and should be reclaimed.
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}
