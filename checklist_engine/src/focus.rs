//! Focus tracking across structural list mutations
//!
//! The tracker owns "who has focus and at what caret offset" and decides,
//! after each mutation the engine reports, which item should receive focus
//! next. Decisions are returned as [`FocusOutcome`] values; the engine
//! routes them to the focus sink (directly for keyboard hiding, through
//! the deferred scheduler for focus requests).

use crate::position::marker_index;
use crate::store::ListStore;
use serde::{Deserialize, Serialize};

/// Caret offset meaning "end of text"
///
/// The focus sink clamps offsets past the end of the item's text, so the
/// maximum offset always lands the caret after the last character.
pub const SELECTION_END_OF_TEXT: usize = usize::MAX;

/// Last known focused position and caret offset
///
/// Overwritten on every focus/selection event; reset after any operation
/// that hides the keyboard. A focus-lost event does not clear the record:
/// it intentionally stays sticky across transient focus churn during
/// relayout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FocusRecord {
    /// Index of the focused entry, if any
    pub position: Option<usize>,
    /// Caret offset within the focused item's text, if known
    pub selection_start: Option<usize>,
}

/// A focus request to be delivered to the focus sink
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FocusRequest {
    /// Index of the entry to focus
    pub position: usize,
    /// Caret offset, clamped by the sink
    pub selection_offset: usize,
    /// Whether the soft keyboard should be shown
    pub show_keyboard: bool,
}

/// Decision produced by a tracker transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusOutcome {
    /// No focus change needed
    None,
    /// Request focus, deferred until the layout pass settles
    Request(FocusRequest),
    /// Hide the keyboard now
    HideKeyboard,
}

/// State machine deciding where focus goes after each mutation
#[derive(Debug, Default)]
pub struct FocusTracker {
    record: FocusRecord,
    pre_check_snapshot: Option<FocusRecord>,
}

impl FocusTracker {
    /// Creates a tracker with no recorded focus
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current focus record
    pub fn record(&self) -> FocusRecord {
        self.record
    }

    fn reset(&mut self) {
        self.record = FocusRecord::default();
        self.pre_check_snapshot = None;
    }

    /// UI reported a focus change on the entry at `position`
    pub fn focus_changed(
        &mut self,
        position: usize,
        selection_start: Option<usize>,
        has_focus: bool,
    ) {
        if has_focus {
            self.record = FocusRecord {
                position: Some(position),
                selection_start,
            };
        }
    }

    /// UI reported a caret/selection change on the entry at `position`
    pub fn selection_changed(
        &mut self,
        position: usize,
        selection_start: Option<usize>,
        has_focus: bool,
    ) {
        self.focus_changed(position, selection_start, has_focus);
    }

    /// A checked-state transition is about to start at `position`
    ///
    /// Snapshots the record when the transitioning item holds focus, so
    /// the item can keep focus after it moves.
    pub fn pre_check_state_change(&mut self, position: usize) {
        if self.record.position == Some(position) {
            self.pre_check_snapshot = Some(self.record);
        }
    }

    /// Discards a pending pre-check snapshot without consuming it
    ///
    /// Used when a transition ends on a path that never reaches
    /// [`item_checked_or_unchecked`](Self::item_checked_or_unchecked).
    pub fn clear_pre_check_snapshot(&mut self) {
        self.pre_check_snapshot = None;
    }

    /// The whole list was replaced
    ///
    /// Resets all state. Going from an empty list to a populated one
    /// focuses the first real item.
    pub fn items_replaced(
        &mut self,
        old_was_empty: bool,
        first_item_index: Option<usize>,
    ) -> FocusOutcome {
        self.reset();
        match first_item_index {
            Some(index) if old_was_empty => FocusOutcome::Request(FocusRequest {
                position: index,
                selection_offset: 0,
                show_keyboard: false,
            }),
            _ => FocusOutcome::None,
        }
    }

    /// A new item was created at `position`
    pub fn new_item_created(&mut self, position: usize) -> FocusOutcome {
        FocusOutcome::Request(FocusRequest {
            position,
            selection_offset: 0,
            show_keyboard: true,
        })
    }

    /// A checked-state transition finished
    ///
    /// `updated_position` is the item's new index, or `None` when the
    /// transition removed it (delete policy). The snapshot taken by
    /// [`pre_check_state_change`](Self::pre_check_state_change) is always
    /// consumed, whatever the outcome.
    pub fn item_checked_or_unchecked(
        &mut self,
        original_position: usize,
        updated_position: Option<usize>,
        item_is_checked: bool,
        store: &dyn ListStore,
    ) -> FocusOutcome {
        let snapshot = self.pre_check_snapshot.take();
        let matches = snapshot
            .map(|s| s.position == Some(original_position))
            .unwrap_or(false);
        if !matches {
            return FocusOutcome::None;
        }
        match updated_position {
            Some(updated) if updated < store.count() => {
                let offset = snapshot
                    .and_then(|s| s.selection_start)
                    .unwrap_or(SELECTION_END_OF_TEXT);
                FocusOutcome::Request(FocusRequest {
                    position: updated,
                    selection_offset: offset,
                    show_keyboard: false,
                })
            }
            _ => self.deletion_focus(original_position as isize, item_is_checked, store),
        }
    }

    /// An item was deleted at `position`
    ///
    /// A delete-key press at the start of the text semantically belongs to
    /// the end of the previous item, so the candidate index is shifted
    /// back by one; icon clicks keep the deleted slot as the candidate.
    pub fn item_deleted(
        &mut self,
        position: usize,
        item_is_checked: bool,
        is_icon_click: bool,
        store: &dyn ListStore,
    ) -> FocusOutcome {
        let candidate = if is_icon_click {
            position as isize
        } else {
            position as isize - 1
        };
        self.deletion_focus(candidate, item_is_checked, store)
    }

    /// All checked items were removed in one pass
    pub fn all_checked_items_removed(&mut self, removed_positions: &[usize]) -> FocusOutcome {
        if let Some(position) = self.record.position {
            if removed_positions.contains(&position) {
                self.reset();
                return FocusOutcome::HideKeyboard;
            }
            if let Some(selection) = self.record.selection_start {
                return FocusOutcome::Request(FocusRequest {
                    position,
                    selection_offset: selection,
                    show_keyboard: false,
                });
            }
        }
        FocusOutcome::None
    }

    /// A drag gesture started
    ///
    /// Dragging must not leave a stale text caret open.
    pub fn drag_started(&mut self) -> FocusOutcome {
        self.reset();
        FocusOutcome::HideKeyboard
    }

    /// Picks the focus target after a deletion near `candidate`
    ///
    /// The candidate index itself wins when it is in bounds and not the
    /// marker. Otherwise the immediate neighborhood is searched for an
    /// item with the same checked flag as the deleted one; scanning
    /// further afield would yank focus away from the edit point, so when
    /// the neighborhood has no same-state sibling, focus is dropped.
    fn deletion_focus(
        &mut self,
        candidate: isize,
        item_is_checked: bool,
        store: &dyn ListStore,
    ) -> FocusOutcome {
        let count = store.count() as isize;
        let marker = marker_index(store).map(|m| m as isize);

        if candidate >= 0 && candidate < count && Some(candidate) != marker {
            return FocusOutcome::Request(FocusRequest {
                position: candidate as usize,
                selection_offset: SELECTION_END_OF_TEXT,
                show_keyboard: false,
            });
        }

        for probe in [candidate - 1, candidate, candidate + 1] {
            if probe < 0 || probe >= count {
                continue;
            }
            let same_state = store
                .get(probe as usize)
                .map(|e| e.is_item_checked(item_is_checked))
                .unwrap_or(false);
            if same_state {
                return FocusOutcome::Request(FocusRequest {
                    position: probe as usize,
                    selection_offset: SELECTION_END_OF_TEXT,
                    show_keyboard: false,
                });
            }
        }

        self.reset();
        FocusOutcome::HideKeyboard
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::VecListStore;
    use checklist_types::{ChecklistItem, ListEntry};

    fn make_store(entries: Vec<ListEntry>) -> VecListStore {
        let mut store = VecListStore::new();
        store.replace_all(entries);
        store
    }

    fn unchecked(text: &str) -> ListEntry {
        ListEntry::Item(ChecklistItem::new(text))
    }

    fn checked(text: &str) -> ListEntry {
        ListEntry::Item(ChecklistItem::new_checked(text, true))
    }

    #[test]
    fn test_focus_changed_records_position() {
        let mut tracker = FocusTracker::new();
        tracker.focus_changed(2, Some(5), true);
        assert_eq!(
            tracker.record(),
            FocusRecord {
                position: Some(2),
                selection_start: Some(5),
            }
        );
    }

    #[test]
    fn test_focus_lost_keeps_record_sticky() {
        let mut tracker = FocusTracker::new();
        tracker.focus_changed(2, Some(5), true);
        tracker.focus_changed(2, None, false);
        assert_eq!(tracker.record().position, Some(2));
    }

    #[test]
    fn test_selection_changed_updates_offset() {
        let mut tracker = FocusTracker::new();
        tracker.focus_changed(1, Some(0), true);
        tracker.selection_changed(1, Some(7), true);
        assert_eq!(tracker.record().selection_start, Some(7));
    }

    #[test]
    fn test_items_replaced_focuses_first_item_when_old_empty() {
        let mut tracker = FocusTracker::new();
        let outcome = tracker.items_replaced(true, Some(0));
        assert_eq!(
            outcome,
            FocusOutcome::Request(FocusRequest {
                position: 0,
                selection_offset: 0,
                show_keyboard: false,
            })
        );
    }

    #[test]
    fn test_items_replaced_resets_without_focus_when_old_nonempty() {
        let mut tracker = FocusTracker::new();
        tracker.focus_changed(1, Some(3), true);
        let outcome = tracker.items_replaced(false, Some(0));
        assert_eq!(outcome, FocusOutcome::None);
        assert_eq!(tracker.record(), FocusRecord::default());
    }

    #[test]
    fn test_new_item_created_shows_keyboard() {
        let mut tracker = FocusTracker::new();
        let outcome = tracker.new_item_created(3);
        assert_eq!(
            outcome,
            FocusOutcome::Request(FocusRequest {
                position: 3,
                selection_offset: 0,
                show_keyboard: true,
            })
        );
    }

    #[test]
    fn test_check_transition_keeps_focus_on_moved_item() {
        let store = make_store(vec![unchecked("u"), ListEntry::Marker, checked("c")]);
        let mut tracker = FocusTracker::new();
        tracker.focus_changed(0, Some(4), true);
        tracker.pre_check_state_change(0);

        let outcome = tracker.item_checked_or_unchecked(0, Some(2), true, &store);
        assert_eq!(
            outcome,
            FocusOutcome::Request(FocusRequest {
                position: 2,
                selection_offset: 4,
                show_keyboard: false,
            })
        );
    }

    #[test]
    fn test_check_transition_without_snapshot_does_nothing() {
        let store = make_store(vec![unchecked("u"), ListEntry::Marker]);
        let mut tracker = FocusTracker::new();
        tracker.focus_changed(0, Some(1), true);
        // No pre_check_state_change call, so no snapshot exists.
        let outcome = tracker.item_checked_or_unchecked(0, Some(1), true, &store);
        assert_eq!(outcome, FocusOutcome::None);
    }

    #[test]
    fn test_check_transition_snapshot_is_consumed() {
        let store = make_store(vec![unchecked("u"), ListEntry::Marker, checked("c")]);
        let mut tracker = FocusTracker::new();
        tracker.focus_changed(0, Some(1), true);
        tracker.pre_check_state_change(0);
        tracker.item_checked_or_unchecked(0, Some(2), true, &store);

        let outcome = tracker.item_checked_or_unchecked(0, Some(2), true, &store);
        assert_eq!(outcome, FocusOutcome::None);
    }

    #[test]
    fn test_deletion_focus_prefers_candidate_slot() {
        let store = make_store(vec![unchecked("a"), unchecked("b"), ListEntry::Marker]);
        let mut tracker = FocusTracker::new();
        let outcome = tracker.item_deleted(1, false, true, &store);
        assert_eq!(
            outcome,
            FocusOutcome::Request(FocusRequest {
                position: 1,
                selection_offset: SELECTION_END_OF_TEXT,
                show_keyboard: false,
            })
        );
    }

    #[test]
    fn test_delete_key_shifts_candidate_to_previous_item() {
        let store = make_store(vec![unchecked("a"), unchecked("b"), ListEntry::Marker]);
        let mut tracker = FocusTracker::new();
        let outcome = tracker.item_deleted(1, false, false, &store);
        assert_eq!(
            outcome,
            FocusOutcome::Request(FocusRequest {
                position: 0,
                selection_offset: SELECTION_END_OF_TEXT,
                show_keyboard: false,
            })
        );
    }

    #[test]
    fn test_deletion_focus_searches_neighborhood_when_candidate_is_marker() {
        // Deleting the last unchecked item leaves the marker at the
        // candidate slot; the search should land on the remaining
        // unchecked neighbor at candidate - 1.
        let store = make_store(vec![unchecked("a"), ListEntry::Marker, checked("c")]);
        let mut tracker = FocusTracker::new();
        let outcome = tracker.item_deleted(1, false, true, &store);
        assert_eq!(
            outcome,
            FocusOutcome::Request(FocusRequest {
                position: 0,
                selection_offset: SELECTION_END_OF_TEXT,
                show_keyboard: false,
            })
        );
    }

    #[test]
    fn test_deletion_focus_gives_up_without_same_state_sibling() {
        let store = make_store(vec![ListEntry::Marker, checked("c")]);
        let mut tracker = FocusTracker::new();
        tracker.focus_changed(0, Some(0), true);
        let outcome = tracker.item_deleted(0, false, true, &store);
        assert_eq!(outcome, FocusOutcome::HideKeyboard);
        assert_eq!(tracker.record(), FocusRecord::default());
    }

    #[test]
    fn test_delete_key_at_first_position_searches_down() {
        // Candidate is -1, out of bounds; the probe at candidate + 1
        // finds the unchecked item now at index 0.
        let store = make_store(vec![unchecked("b"), ListEntry::Marker]);
        let mut tracker = FocusTracker::new();
        let outcome = tracker.item_deleted(0, false, false, &store);
        assert_eq!(
            outcome,
            FocusOutcome::Request(FocusRequest {
                position: 0,
                selection_offset: SELECTION_END_OF_TEXT,
                show_keyboard: false,
            })
        );
    }

    #[test]
    fn test_all_checked_removed_hides_keyboard_when_focus_was_removed() {
        let mut tracker = FocusTracker::new();
        tracker.focus_changed(3, Some(2), true);
        let outcome = tracker.all_checked_items_removed(&[2, 3]);
        assert_eq!(outcome, FocusOutcome::HideKeyboard);
        assert_eq!(tracker.record(), FocusRecord::default());
    }

    #[test]
    fn test_all_checked_removed_refocuses_surviving_position() {
        let mut tracker = FocusTracker::new();
        tracker.focus_changed(0, Some(4), true);
        let outcome = tracker.all_checked_items_removed(&[2, 3]);
        assert_eq!(
            outcome,
            FocusOutcome::Request(FocusRequest {
                position: 0,
                selection_offset: 4,
                show_keyboard: false,
            })
        );
    }

    #[test]
    fn test_all_checked_removed_without_record_does_nothing() {
        let mut tracker = FocusTracker::new();
        let outcome = tracker.all_checked_items_removed(&[1]);
        assert_eq!(outcome, FocusOutcome::None);
    }

    #[test]
    fn test_drag_started_hides_keyboard_and_resets() {
        let mut tracker = FocusTracker::new();
        tracker.focus_changed(1, Some(2), true);
        tracker.pre_check_state_change(1);
        let outcome = tracker.drag_started();
        assert_eq!(outcome, FocusOutcome::HideKeyboard);
        assert_eq!(tracker.record(), FocusRecord::default());
    }
}
