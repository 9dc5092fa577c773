//! Platform adapter traits for the checklist engine
//!
//! This module defines the abstraction layer between the engine and its
//! host UI. The engine reads and mutates the ordered list only through
//! [`ListStore`], pushes focus and keyboard decisions through [`FocusSink`],
//! and reports soft-deletions through [`DeletionListener`].
//!
//! ## Philosophy
//!
//! - **Explicit, not implicit**: All host interactions go through traits
//! - **Minimal surface**: Only abstract what the engine actually drives
//! - **Deterministic**: Implementations must be deterministic and testable

pub mod fake;

pub use fake::FakeChecklistPlatform;

use checklist_types::ItemId;

pub use crate::store::ListStore;

/// Platform abstraction trait combining all checklist engine requirements
///
/// Implementations provide the host-specific collaborators the engine
/// drives: the ordered list store, the focus sink, and the deletion
/// listener.
pub trait ChecklistPlatform {
    /// Get the ordered list store holding items and the marker
    fn store(&mut self) -> &mut dyn ListStore;

    /// Get the focus sink for focus, caret, and keyboard requests
    fn focus(&mut self) -> &mut dyn FocusSink;

    /// Get the listener notified when an item is soft-deleted
    fn deletions(&mut self) -> &mut dyn DeletionListener;
}

/// Focus sink driven by the engine
///
/// Implementations place the text caret, toggle the soft keyboard, and
/// scroll items into view in the host UI.
pub trait FocusSink {
    /// Requests focus on the item at `position`
    ///
    /// `selection_offset` is the caret position within the item's text.
    /// Offsets past the end of the text are clamped by the implementation,
    /// so a very large offset means "end of text".
    fn request_focus(&mut self, position: usize, selection_offset: usize, show_keyboard: bool);

    /// Hides the soft keyboard
    fn hide_keyboard(&mut self);

    /// Scrolls the item at `position` into view
    ///
    /// Invoked synchronously before a deferred focus request is scheduled,
    /// so the host can start moving while the layout pass settles.
    fn scroll_to(&mut self, position: usize);
}

/// Listener for soft-deletions
///
/// Invoked whenever an item is removed restorably (icon click, or a
/// checked-transition under the delete policy), so the host can offer undo.
pub trait DeletionListener {
    /// Reports that the item with `id` and `text` was soft-deleted
    fn item_deleted(&mut self, text: &str, id: ItemId);
}
