//! Frontend Models
//!
//! Data structures matching backend entities.

use serde::{Deserialize, Serialize};

/// Board data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    pub id: u32,
    pub name: String,
    pub created_at: i64,
    pub updated_at: i64,
}

/// List data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct List {
    pub id: u32,
    pub name: String,
    pub board_id: u32,
    pub order: i32,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Card data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub list_id: u32,
    pub order: i32,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Fields to change on a card; `None` leaves the stored value alone
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CardPatch {
    pub title: Option<String>,
    pub description: Option<String>,
}

impl CardPatch {
    pub fn title(title: impl Into<String>) -> Self {
        Self { title: Some(title.into()), description: None }
    }
}
