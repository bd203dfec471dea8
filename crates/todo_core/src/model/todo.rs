//! Todo domain model.
//!
//! # Responsibility
//! - Define the single entity rendered by the todo screen.
//!
//! # Invariants
//! - `id` is stable and never reused for another item.
//! - `text` is the only field that changes after creation.
//! - Empty text is rejected by callers, not by this type.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier of one todo item.
pub type TodoId = Uuid;

/// One user-entered todo note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    /// Assigned at creation, immutable afterwards.
    pub id: TodoId,
    /// Display text.
    pub text: String,
}

impl TodoItem {
    /// Creates a new item with a generated stable ID.
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), text)
    }

    /// Creates an item with a caller-provided ID.
    ///
    /// Used to overwrite an existing row through `create_or_update`.
    pub fn with_id(id: TodoId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
        }
    }

    /// Returns whether the text is empty and must not be submitted.
    pub fn is_blank(&self) -> bool {
        self.text.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::TodoItem;

    #[test]
    fn new_items_get_distinct_ids() {
        let first = TodoItem::new("Buy milk");
        let second = TodoItem::new("Buy milk");
        assert_ne!(first.id, second.id);
        assert_eq!(first.text, second.text);
    }

    #[test]
    fn with_id_keeps_caller_identity() {
        let original = TodoItem::new("draft");
        let replacement = TodoItem::with_id(original.id, "final");
        assert_eq!(replacement.id, original.id);
        assert_eq!(replacement.text, "final");
        assert!(!replacement.is_blank());
        assert!(TodoItem::new("").is_blank());
    }
}
