//! Frontend Models
//!
//! Data structures matching the items API.

use serde::{Deserialize, Serialize};

/// Item record as returned by the server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Server-assigned opaque identifier
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default = "default_rating")]
    pub rating: i32,
    #[serde(default)]
    pub description: String,
    /// ISO calendar date, immutable once the item exists
    #[serde(rename = "createdDate", default)]
    pub created_date: String,
}

fn default_rating() -> i32 {
    1
}

/// Request body for create/update (the server assigns `id`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemInput {
    pub name: String,
    pub rating: i32,
    pub description: String,
    #[serde(rename = "createdDate")]
    pub created_date: String,
}

/// In-progress form state for the editor.
///
/// A draft without an `id` has never been persisted; it becomes an
/// [`Item`] only through the server's create response.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemDraft {
    pub id: Option<String>,
    pub name: String,
    pub rating: i32,
    pub description: String,
    pub created_date: String,
}

impl ItemDraft {
    /// Empty draft for create mode; `created_date` defaults to today
    pub fn new(today: String) -> Self {
        Self {
            id: None,
            name: String::new(),
            rating: 1,
            description: String::new(),
            created_date: today,
        }
    }

    /// Seed a draft from an existing item for edit mode
    pub fn seeded_from(item: &Item) -> Self {
        Self {
            id: Some(item.id.clone()),
            name: item.name.clone(),
            rating: item.rating,
            description: item.description.clone(),
            created_date: item.created_date.clone(),
        }
    }

    /// Request body for this draft (drops the id, which travels in the URL)
    pub fn to_input(&self) -> ItemInput {
        ItemInput {
            name: self.name.clone(),
            rating: self.rating,
            description: self.description.clone(),
            created_date: self.created_date.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_deserializes_wire_shape() {
        let json = r#"{"id":"42","name":"Book","rating":4,"description":"Good read","createdDate":"2024-01-01"}"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.id, "42");
        assert_eq!(item.name, "Book");
        assert_eq!(item.rating, 4);
        assert_eq!(item.created_date, "2024-01-01");
    }

    #[test]
    fn test_item_missing_fields_fall_back() {
        let json = r#"{"id":"9"}"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.rating, 1);
        assert_eq!(item.name, "");
        assert_eq!(item.created_date, "");
    }

    #[test]
    fn test_input_serializes_wire_shape() {
        let input = ItemInput {
            name: "Book".to_string(),
            rating: 4,
            description: "Good read".to_string(),
            created_date: "2024-01-01".to_string(),
        };
        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Book",
                "rating": 4,
                "description": "Good read",
                "createdDate": "2024-01-01",
            })
        );
    }

    #[test]
    fn test_seeded_draft_keeps_created_date_through_input() {
        let item = Item {
            id: "42".to_string(),
            name: "Book".to_string(),
            rating: 3,
            description: "Good read".to_string(),
            created_date: "2024-01-01".to_string(),
        };
        let mut draft = ItemDraft::seeded_from(&item);
        assert_eq!(draft.id.as_deref(), Some("42"));

        // Editing only the rating must not touch the created date
        draft.rating = 5;
        let input = draft.to_input();
        assert_eq!(input.rating, 5);
        assert_eq!(input.created_date, "2024-01-01");
    }

    #[test]
    fn test_new_draft_defaults() {
        let draft = ItemDraft::new("2024-06-30".to_string());
        assert_eq!(draft.id, None);
        assert_eq!(draft.rating, 1);
        assert_eq!(draft.created_date, "2024-06-30");
    }
}
