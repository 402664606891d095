//! Domain factories for creating identifiers.

use rand::Rng;

use super::error::ValueObjectError;
use super::value_object::{PlayerId, RoomCode, ROOM_CODE_LEN};

/// Characters a room code is drawn from.
const ROOM_CODE_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Factory for stable player identifiers.
///
/// Issued at join time, distinct from the transport connection id.
pub struct PlayerIdFactory;

impl PlayerIdFactory {
    /// Generate a new random PlayerId (UUID v4).
    pub fn generate() -> PlayerId {
        PlayerId::from_uuid(uuid::Uuid::new_v4())
    }
}

/// Factory for human-shareable room codes.
pub struct RoomCodeFactory;

impl RoomCodeFactory {
    /// Generate a random six-character uppercase alphanumeric room code.
    ///
    /// Uniqueness is not guaranteed here; the caller checks the registry
    /// and retries on collision.
    ///
    /// # Errors
    ///
    /// Does not fail in practice; returns Result for consistency with the
    /// domain error handling pattern.
    pub fn generate() -> Result<RoomCode, ValueObjectError> {
        let mut rng = rand::thread_rng();
        let code: String = (0..ROOM_CODE_LEN)
            .map(|_| {
                let idx = rng.gen_range(0..ROOM_CODE_CHARSET.len());
                ROOM_CODE_CHARSET[idx] as char
            })
            .collect();
        RoomCode::parse(&code)
    }
}
