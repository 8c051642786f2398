//! Card Entity
//!
//! A task unit with a title and free-text description, belonging to exactly one list.

use serde::{Deserialize, Serialize};
use super::entity::Entity;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: u32,
    pub title: String,
    /// Free text; empty for freshly created cards
    #[serde(default)]
    pub description: String,
    pub list_id: u32,
    /// Display position within the list
    pub order: i32,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Card {
    /// Create an unsaved card under a list with an empty description
    pub fn new(list_id: u32, title: impl Into<String>) -> Self {
        Self {
            id: 0,
            title: title.into(),
            description: String::new(),
            list_id,
            order: 0,
            created_at: 0,
            updated_at: 0,
        }
    }
}

impl Entity for Card {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Partial card update. Absent fields are left as they are.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CardPatch {
    pub fn title(title: impl Into<String>) -> Self {
        Self { title: Some(title.into()), description: None }
    }

    pub fn description(description: impl Into<String>) -> Self {
        Self { title: None, description: Some(description.into()) }
    }

    /// A patch carrying neither field; applying it is a no-op
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_defaults_to_empty_description() {
        let card = Card::new(9, "Write draft");
        assert_eq!(card.list_id, 9);
        assert_eq!(card.description, "");
    }

    #[test]
    fn test_patch_fields() {
        let patch: CardPatch = serde_json::from_str("{}").unwrap();
        assert!(patch.is_empty());

        let patch: CardPatch = serde_json::from_str(r#"{"description":"draft v1"}"#).unwrap();
        assert_eq!(patch, CardPatch::description("draft v1"));
        assert!(!patch.is_empty());
        assert_eq!(serde_json::to_string(&CardPatch::title("t")).unwrap(), r#"{"title":"t"}"#);
    }
}
