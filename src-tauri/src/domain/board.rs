//! Board Entity
//!
//! Top-level container. Lists point back at a board through `List::board_id`;
//! the board itself holds no references to them.

use serde::{Deserialize, Serialize};
use super::entity::Entity;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Unique identifier (assigned by the store)
    pub id: u32,
    pub name: String,
    /// Unix milliseconds
    pub created_at: i64,
    /// Unix milliseconds
    pub updated_at: i64,
}

impl Board {
    /// Create an unsaved board; id and timestamps are filled in by the repository
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: 0,
            name: name.into(),
            created_at: 0,
            updated_at: 0,
        }
    }
}

impl Entity for Board {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}
