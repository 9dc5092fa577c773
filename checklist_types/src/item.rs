//! Checklist item value type

use crate::ItemId;
use serde::{Deserialize, Serialize};

/// One checkable line of text
///
/// Items are treated as immutable values. Editing text or flipping the
/// checked flag produces a replacement item that keeps the original id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    /// Stable identity, unique for the session
    pub id: ItemId,
    /// Item text, without any checkbox prefix
    pub text: String,
    /// Whether the item is checked off
    pub is_checked: bool,
}

impl ChecklistItem {
    /// Creates a new unchecked item with a fresh id
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: ItemId::new(),
            text: text.into(),
            is_checked: false,
        }
    }

    /// Creates a new item with a fresh id and the given checked flag
    pub fn new_checked(text: impl Into<String>, is_checked: bool) -> Self {
        Self {
            id: ItemId::new(),
            text: text.into(),
            is_checked,
        }
    }

    /// Returns a copy of this item with different text, same id
    pub fn with_text(&self, text: impl Into<String>) -> Self {
        Self {
            id: self.id,
            text: text.into(),
            is_checked: self.is_checked,
        }
    }

    /// Returns a copy of this item with a different checked flag, same id
    pub fn with_checked(&self, is_checked: bool) -> Self {
        Self {
            id: self.id,
            text: self.text.clone(),
            is_checked,
        }
    }
}
