//! Domain Layer
//!
//! Contains all domain entities and core abstractions.
//! This layer has NO external dependencies (except serde for serialization).

mod entity;
mod board;
mod list;
mod card;

pub use entity::{Entity, DomainError, DomainResult};
pub use board::Board;
pub use list::List;
pub use card::{Card, CardPatch};

