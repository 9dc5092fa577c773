//! List entry sum type

use crate::ChecklistItem;
use serde::{Deserialize, Serialize};

/// One slot in the ordered list: a checklist item or the new-item marker
///
/// The marker is a singleton sentinel. Exactly one instance is present in
/// the list once it is initialized, and its index is the partition boundary
/// between unchecked items (before it) and checked items (after it).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ListEntry {
    /// A checkable text item
    Item(ChecklistItem),
    /// The create-new-item affordance
    Marker,
}

impl ListEntry {
    /// Returns true if this entry is the marker
    pub fn is_marker(&self) -> bool {
        matches!(self, ListEntry::Marker)
    }

    /// Returns the contained item, if any
    pub fn as_item(&self) -> Option<&ChecklistItem> {
        match self {
            ListEntry::Item(item) => Some(item),
            ListEntry::Marker => None,
        }
    }

    /// Returns true if this entry is an item with the given checked flag
    pub fn is_item_checked(&self, is_checked: bool) -> bool {
        match self {
            ListEntry::Item(item) => item.is_checked == is_checked,
            ListEntry::Marker => false,
        }
    }
}
