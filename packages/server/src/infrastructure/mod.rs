//! Infrastructure layer: concrete storage and wire representations.

pub mod dto;
pub mod repository;
