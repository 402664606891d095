//! Registry implementations.
//!
//! The domain layer defines the `RoomRegistry` trait; the use case layer
//! depends on the trait, never on a concrete implementation here
//! (dependency inversion).

pub mod inmemory;

pub use inmemory::InMemoryRoomRegistry;
