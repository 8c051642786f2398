//! List Entity
//!
//! A named column within a board.

use serde::{Deserialize, Serialize};
use super::entity::Entity;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct List {
    pub id: u32,
    pub name: String,
    /// Owning board (reference only, not enforced by the store)
    pub board_id: u32,
    /// Display position within the board: max + 1 at creation, never re-balanced
    pub order: i32,
    pub created_at: i64,
    pub updated_at: i64,
}

impl List {
    /// Create an unsaved list under a board
    pub fn new(board_id: u32, name: impl Into<String>) -> Self {
        Self {
            id: 0,
            name: name.into(),
            board_id,
            order: 0,
            created_at: 0,
            updated_at: 0,
        }
    }
}

impl Entity for List {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_creation() {
        let list = List::new(4, "Todo");
        assert_eq!(list.board_id, 4);
        assert_eq!(list.order, 0);
    }

    #[test]
    fn test_order_field_name() {
        let list = List { order: 2, ..List::new(1, "Doing") };
        let json = serde_json::to_value(&list).unwrap();
        assert_eq!(json["order"], 2);
        assert_eq!(json["board_id"], 1);
    }
}
