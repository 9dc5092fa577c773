//! Fake platform implementation for testing
//!
//! This module provides a simple, deterministic platform implementation
//! for unit testing the checklist engine without a real UI host.

use super::{ChecklistPlatform, DeletionListener, FocusSink, ListStore};
use crate::store::VecListStore;
use checklist_types::{ItemId, ListEntry};

/// One recorded focus request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedFocus {
    pub position: usize,
    pub selection_offset: usize,
    pub show_keyboard: bool,
}

/// Fake platform for testing
///
/// Backs the list with an in-memory [`VecListStore`] and records every
/// focus, keyboard, scroll, and deletion call for later inspection. All
/// operations are deterministic and suitable for unit tests.
pub struct FakeChecklistPlatform {
    store: VecListStore,
    focus: FakeFocusSink,
    deletions: FakeDeletionListener,
}

impl FakeChecklistPlatform {
    /// Creates a new fake platform with an empty store
    pub fn new() -> Self {
        Self {
            store: VecListStore::new(),
            focus: FakeFocusSink::new(),
            deletions: FakeDeletionListener::new(),
        }
    }

    /// Returns the current store contents
    pub fn entries(&self) -> &[ListEntry] {
        self.store.entries()
    }

    /// Returns all recorded focus requests, oldest first
    pub fn focus_requests(&self) -> &[RecordedFocus] {
        &self.focus.requests
    }

    /// Returns the most recent focus request, if any
    pub fn last_focus_request(&self) -> Option<&RecordedFocus> {
        self.focus.requests.last()
    }

    /// Number of times the keyboard was hidden
    pub fn hide_keyboard_count(&self) -> usize {
        self.focus.hide_keyboard_count
    }

    /// Positions passed to scroll_to, oldest first
    pub fn scroll_requests(&self) -> &[usize] {
        &self.focus.scrolls
    }

    /// Recorded deletion notifications as (text, id) pairs
    pub fn deletion_notifications(&self) -> &[(String, ItemId)] {
        &self.deletions.notified
    }

    /// Clears all recorded focus, scroll, and deletion history
    pub fn reset_recording(&mut self) {
        self.focus.requests.clear();
        self.focus.scrolls.clear();
        self.focus.hide_keyboard_count = 0;
        self.deletions.notified.clear();
    }
}

impl Default for FakeChecklistPlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl ChecklistPlatform for FakeChecklistPlatform {
    fn store(&mut self) -> &mut dyn ListStore {
        &mut self.store
    }

    fn focus(&mut self) -> &mut dyn FocusSink {
        &mut self.focus
    }

    fn deletions(&mut self) -> &mut dyn DeletionListener {
        &mut self.deletions
    }
}

/// Fake focus sink implementation
struct FakeFocusSink {
    requests: Vec<RecordedFocus>,
    scrolls: Vec<usize>,
    hide_keyboard_count: usize,
}

impl FakeFocusSink {
    fn new() -> Self {
        Self {
            requests: Vec::new(),
            scrolls: Vec::new(),
            hide_keyboard_count: 0,
        }
    }
}

impl FocusSink for FakeFocusSink {
    fn request_focus(&mut self, position: usize, selection_offset: usize, show_keyboard: bool) {
        self.requests.push(RecordedFocus {
            position,
            selection_offset,
            show_keyboard,
        });
    }

    fn hide_keyboard(&mut self) {
        self.hide_keyboard_count += 1;
    }

    fn scroll_to(&mut self, position: usize) {
        self.scrolls.push(position);
    }
}

/// Fake deletion listener implementation
struct FakeDeletionListener {
    notified: Vec<(String, ItemId)>,
}

impl FakeDeletionListener {
    fn new() -> Self {
        Self {
            notified: Vec::new(),
        }
    }
}

impl DeletionListener for FakeDeletionListener {
    fn item_deleted(&mut self, text: &str, id: ItemId) {
        self.notified.push((text.to_string(), id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use checklist_types::ChecklistItem;

    #[test]
    fn test_fake_platform_creation() {
        let platform = FakeChecklistPlatform::new();
        assert!(platform.entries().is_empty());
        assert!(platform.focus_requests().is_empty());
        assert_eq!(platform.hide_keyboard_count(), 0);
    }

    #[test]
    fn test_fake_store_operations() {
        let mut platform = FakeChecklistPlatform::new();
        platform
            .store()
            .insert_at(ListEntry::Item(ChecklistItem::new("a")), 0);
        platform.store().insert_at(ListEntry::Marker, 1);
        assert_eq!(platform.entries().len(), 2);
        assert!(platform.entries()[1].is_marker());
    }

    #[test]
    fn test_fake_focus_recording() {
        let mut platform = FakeChecklistPlatform::new();
        platform.focus().request_focus(2, 0, true);
        platform.focus().scroll_to(2);
        platform.focus().hide_keyboard();

        assert_eq!(
            platform.last_focus_request(),
            Some(&RecordedFocus {
                position: 2,
                selection_offset: 0,
                show_keyboard: true,
            })
        );
        assert_eq!(platform.scroll_requests(), &[2]);
        assert_eq!(platform.hide_keyboard_count(), 1);
    }

    #[test]
    fn test_fake_deletion_recording() {
        let mut platform = FakeChecklistPlatform::new();
        let id = ItemId::new();
        platform.deletions().item_deleted("gone", id);
        assert_eq!(platform.deletion_notifications().len(), 1);
        assert_eq!(platform.deletion_notifications()[0].0, "gone");
        assert_eq!(platform.deletion_notifications()[0].1, id);
    }

    #[test]
    fn test_reset_recording() {
        let mut platform = FakeChecklistPlatform::new();
        platform.focus().request_focus(0, 0, false);
        platform.focus().hide_keyboard();
        platform.reset_recording();
        assert!(platform.focus_requests().is_empty());
        assert_eq!(platform.hide_keyboard_count(), 0);
    }
}
