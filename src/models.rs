//! Frontend Models
//!
//! Data structures for the to-do collection.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier of a to-do item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(pub u32);

impl TodoId {
    /// Next free id: one past the largest id in use, starting at 1
    pub fn next_after(items: &[TodoItem]) -> Self {
        TodoId(items.iter().map(|item| item.id.0).max().map_or(1, |max| max + 1))
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// To-do item, owned by the list component
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    pub id: TodoId,
    pub text: String,
    pub is_complete: bool,
}

impl TodoItem {
    pub fn new(id: TodoId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            is_complete: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_id() {
        assert_eq!(TodoId::next_after(&[]), TodoId(1));

        let items = vec![TodoItem::new(TodoId(3), "a"), TodoItem::new(TodoId(1), "b")];
        assert_eq!(TodoId::next_after(&items), TodoId(4));
    }

    #[test]
    fn test_item_json_shape() {
        let mut item = TodoItem::new(TodoId(1), "Buy milk");
        item.is_complete = true;

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json, serde_json::json!({ "id": 1, "text": "Buy milk", "isComplete": true }));
    }
}
