//! Value Objects for domain models.
//!
//! Value Objects are immutable objects that represent values in the domain.
//! They are compared by their value, not by identity.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::ValueObjectError;

/// Minimum player name length in characters
pub const PLAYER_NAME_MIN_LEN: usize = 2;

/// Maximum player name length in characters
pub const PLAYER_NAME_MAX_LEN: usize = 15;

/// Room code length in characters
pub const ROOM_CODE_LEN: usize = 6;

/// Number of color ordinals available to players
pub const COLOR_COUNT: u8 = 8;

/// Stable player identifier value object.
///
/// Issued at join time and independent of the transport connection, so a
/// future reconnect can re-bind a connection to the same player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(uuid::Uuid);

impl PlayerId {
    /// Wrap an existing UUID as a PlayerId.
    pub fn from_uuid(id: uuid::Uuid) -> Self {
        Self(id)
    }

    /// Parse a PlayerId from its string form.
    pub fn parse(s: &str) -> Option<Self> {
        uuid::Uuid::parse_str(s).ok().map(Self)
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Player display name value object.
///
/// Length is bounded to 2..=15 characters; validated before any room
/// mutation happens.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerName(String);

impl PlayerName {
    /// Create a new PlayerName.
    ///
    /// # Errors
    ///
    /// Returns `ValueObjectError::PlayerNameTooShort` or
    /// `ValueObjectError::PlayerNameTooLong` when the name falls outside
    /// the 2..=15 character bounds.
    pub fn new(name: String) -> Result<Self, ValueObjectError> {
        let len = name.chars().count();
        if len < PLAYER_NAME_MIN_LEN {
            return Err(ValueObjectError::PlayerNameTooShort {
                min: PLAYER_NAME_MIN_LEN,
                actual: len,
            });
        }
        if len > PLAYER_NAME_MAX_LEN {
            return Err(ValueObjectError::PlayerNameTooLong {
                max: PLAYER_NAME_MAX_LEN,
                actual: len,
            });
        }
        Ok(Self(name))
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for PlayerName {
    type Error = ValueObjectError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        Self::new(name)
    }
}

impl fmt::Display for PlayerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Room code value object.
///
/// Six uppercase alphanumeric characters; input is case-normalized so
/// players can type codes in either case.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoomCode(String);

impl RoomCode {
    /// Parse a room code, normalizing lowercase input to uppercase.
    ///
    /// # Errors
    ///
    /// Returns `ValueObjectError::RoomCodeInvalid` when the code is not
    /// exactly six ASCII alphanumeric characters.
    pub fn parse(code: &str) -> Result<Self, ValueObjectError> {
        let normalized = code.trim().to_ascii_uppercase();
        if normalized.len() != ROOM_CODE_LEN
            || !normalized.chars().all(|c| c.is_ascii_alphanumeric())
        {
            return Err(ValueObjectError::RoomCodeInvalid(code.to_string()));
        }
        Ok(Self(normalized))
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoomCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Color ordinal assigned to a player at join time (0..=7).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ColorIndex(u8);

impl ColorIndex {
    /// The host's color ordinal.
    pub const ZERO: ColorIndex = ColorIndex(0);

    /// Wrap a raw ordinal. Returns None when out of palette range.
    pub fn new(index: u8) -> Option<Self> {
        (index < COLOR_COUNT).then_some(Self(index))
    }

    /// Get the raw ordinal value.
    pub fn value(&self) -> u8 {
        self.0
    }
}

/// Timestamp value object.
///
/// Unix timestamp in milliseconds (UTC).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Timestamp(i64);

impl Timestamp {
    /// Create a new Timestamp from Unix milliseconds.
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Get the inner i64 value.
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
