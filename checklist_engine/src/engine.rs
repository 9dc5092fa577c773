//! List engine orchestrator
//!
//! Receives UI-level events (checked, unchecked, text-changed, enter-key,
//! delete, drag-move), mutates the list store accordingly, and drives the
//! focus tracker. The engine exclusively owns the soft-delete and
//! previous-position tables; the platform owns item storage and order.

use crate::config::{CheckedItemPolicy, EngineConfig, UncheckedItemPolicy};
use crate::deferred::FocusScheduler;
use crate::focus::{FocusOutcome, FocusTracker};
use crate::order;
use crate::platform::ChecklistPlatform;
use crate::position;
use crate::store::ListStore;
use checklist_types::{ChecklistItem, ItemId, ListEntry};
use std::collections::BTreeMap;

/// A soft-deleted item held for possible restoration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoftDeleteEntry {
    /// The removed item, exactly as it left the list
    pub item: ChecklistItem,
    /// Index the item occupied when it was removed
    pub original_index: usize,
}

/// The checklist list engine
///
/// Single-threaded and synchronous: every event handler runs to completion
/// before the next is accepted. The only temporal indirection is the
/// deferred focus request, driven by [`tick`](Self::tick).
pub struct ChecklistEngine<P: ChecklistPlatform> {
    platform: P,
    config: EngineConfig,
    focus: FocusTracker,
    scheduler: FocusScheduler,
    soft_deleted: BTreeMap<ItemId, SoftDeleteEntry>,
    previous_positions: BTreeMap<ItemId, usize>,
}

impl<P: ChecklistPlatform> ChecklistEngine<P> {
    /// Creates an engine with the default configuration
    pub fn new(platform: P) -> Self {
        Self::with_config(platform, EngineConfig::default())
    }

    /// Creates an engine with an explicit configuration
    pub fn with_config(platform: P, config: EngineConfig) -> Self {
        Self {
            platform,
            config,
            focus: FocusTracker::new(),
            scheduler: FocusScheduler::new(),
            soft_deleted: BTreeMap::new(),
            previous_positions: BTreeMap::new(),
        }
    }

    /// Returns the platform
    pub fn platform(&self) -> &P {
        &self.platform
    }

    /// Returns the platform mutably
    pub fn platform_mut(&mut self) -> &mut P {
        &mut self.platform
    }

    /// Returns the active configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns true if a deferred focus request is waiting
    pub fn has_pending_focus(&self) -> bool {
        self.scheduler.has_pending()
    }

    /// Advances logical time, delivering a due deferred focus request
    pub fn tick(&mut self, elapsed_ms: u64) {
        if let Some(request) = self.scheduler.tick(elapsed_ms) {
            self.platform.focus().request_focus(
                request.position,
                request.selection_offset,
                request.show_keyboard,
            );
        }
    }

    /// Replaces the whole list from plain text
    ///
    /// Empty input is substituted with a single empty item so the list
    /// never starts without an editable row. Soft-delete and
    /// previous-position bookkeeping reset with the session.
    pub fn set_items(&mut self, text: &str) {
        let mut items = checklist_codec::decode(text);
        if items.is_empty() {
            items.push(ChecklistItem::new(""));
        }
        let mut entries: Vec<ListEntry> = items.into_iter().map(ListEntry::Item).collect();
        entries.push(ListEntry::Marker);
        order::sort_entries(&mut entries);

        let store = self.platform.store();
        let old_was_empty = store.count() == 0;
        store.replace_all(entries);

        self.soft_deleted.clear();
        self.previous_positions.clear();
        self.scheduler.cancel();

        let first_item = position::first_index(self.platform.store(), |e| !e.is_marker());
        let outcome = self.focus.items_replaced(old_was_empty, first_item);
        self.apply_outcome(outcome);
        tracing::debug!(
            items = position::item_count(self.platform.store()),
            "list replaced from text"
        );
    }

    /// Exports the current list as plain text
    pub fn get_formatted_text(&mut self, keep_checkbox_symbols: bool, keep_checked_items: bool) -> String {
        let store = self.platform.store();
        let items: Vec<ChecklistItem> = (0..store.count())
            .filter_map(|i| store.get(i).and_then(|e| e.as_item()).cloned())
            .collect();
        checklist_codec::encode(&items, keep_checkbox_symbols, keep_checked_items)
    }

    /// Exports the current list using the configured export defaults
    pub fn get_formatted_text_default(&mut self) -> String {
        let keep_symbols = self.config.keep_checkbox_symbols;
        let keep_checked = self.config.keep_checked_items;
        self.get_formatted_text(keep_symbols, keep_checked)
    }

    /// The create-new-item affordance at `position` was activated
    ///
    /// The marker's slot becomes a fresh empty unchecked item, a new
    /// marker is inserted directly after it, and focus moves to the fresh
    /// item with the keyboard shown.
    pub fn on_create_new_item_clicked(&mut self, position: usize) {
        let store = self.platform.store();
        let is_marker = store.get(position).map(ListEntry::is_marker).unwrap_or(false);
        if !is_marker {
            tracing::warn!(position, "create-new-item on a non-marker slot ignored");
            return;
        }
        store.replace_at(ListEntry::Item(ChecklistItem::new("")), position);
        store.insert_at(ListEntry::Marker, position + 1);

        let outcome = self.focus.new_item_created(position);
        self.apply_outcome(outcome);
        tracing::debug!(position, "new item created at marker slot");
    }

    /// The item at `position` was edited to `text`
    ///
    /// Same-position value update; no reflow and no focus change.
    pub fn on_text_changed(&mut self, position: usize, text: &str) {
        let store = self.platform.store();
        let Some(item) = store.get(position).and_then(|e| e.as_item()).cloned() else {
            tracing::warn!(position, "text change on a stale position ignored");
            return;
        };
        store.replace_at(ListEntry::Item(item.with_text(text)), position);
    }

    /// Enter was pressed inside the item at `position`
    ///
    /// The item's text splits at the caret; with a range selected, the
    /// selected substring seeds the new item and the remainder stays put.
    /// The new item inherits the checked flag and lands directly below.
    pub fn on_enter_key_pressed(
        &mut self,
        position: usize,
        full_text: &str,
        caret_start: usize,
        caret_end: usize,
    ) {
        let store = self.platform.store();
        let Some(item) = store.get(position).and_then(|e| e.as_item()).cloned() else {
            tracing::warn!(position, "enter key on a stale position ignored");
            return;
        };

        let start = byte_offset(full_text, caret_start.min(caret_end));
        let end = byte_offset(full_text, caret_start.max(caret_end));
        let (current_text, new_text) = if start == end {
            (full_text[..start].to_string(), full_text[start..].to_string())
        } else {
            (
                format!("{}{}", &full_text[..start], &full_text[end..]),
                full_text[start..end].to_string(),
            )
        };

        store.replace_at(ListEntry::Item(item.with_text(current_text)), position);
        store.insert_at(
            ListEntry::Item(ChecklistItem::new_checked(new_text, item.is_checked)),
            position + 1,
        );

        let outcome = self.focus.new_item_created(position + 1);
        self.apply_outcome(outcome);
    }

    /// Delete was pressed at the start of the item at `position`
    pub fn on_delete_key_pressed(&mut self, position: usize) {
        self.delete_item(position, false);
    }

    /// The delete icon of the item at `position` was clicked
    ///
    /// Icon deletions are soft-deletes: the item is recorded for
    /// restoration and the deletion listener is notified.
    pub fn on_delete_icon_clicked(&mut self, position: usize) {
        self.delete_item(position, true);
    }

    fn delete_item(&mut self, position: usize, is_icon_click: bool) {
        let store = self.platform.store();
        let Some(item) = store.get(position).and_then(|e| e.as_item()).cloned() else {
            tracing::warn!(position, "delete on a stale position ignored");
            return;
        };
        store.remove_at(position);

        if is_icon_click {
            self.soft_deleted.insert(
                item.id,
                SoftDeleteEntry {
                    item: item.clone(),
                    original_index: position,
                },
            );
            self.platform.deletions().item_deleted(&item.text, item.id);
        }
        tracing::debug!(position, icon = is_icon_click, "item deleted");

        if self.ensure_minimum_items() {
            return;
        }
        let outcome = {
            let store = self.platform.store();
            self.focus
                .item_deleted(position, item.is_checked, is_icon_click, &*store)
        };
        self.apply_outcome(outcome);
    }

    /// The item at `position` was checked off
    pub fn on_checked(&mut self, position: usize) {
        self.set_checked_state(position, true);
    }

    /// The item at `position` was unchecked
    pub fn on_unchecked(&mut self, position: usize) {
        self.set_checked_state(position, false);
    }

    fn set_checked_state(&mut self, position: usize, is_checked: bool) {
        let store = self.platform.store();
        let Some(item) = store.get(position).and_then(|e| e.as_item()).cloned() else {
            tracing::warn!(position, "checked-state change on a stale position ignored");
            return;
        };

        self.focus.pre_check_state_change(position);

        if is_checked
            && self.config.unchecked_item_policy == UncheckedItemPolicy::MoveToPreviousPosition
        {
            self.previous_positions.insert(item.id, position);
        }

        self.platform.store().remove_at(position);
        let updated = item.with_checked(is_checked);

        let updated_position = if is_checked {
            self.place_checked_item(updated.clone(), position)
        } else {
            Some(self.place_unchecked_item(updated.clone()))
        };
        tracing::debug!(
            from = position,
            to = ?updated_position,
            checked = is_checked,
            "checked-state transition"
        );

        if updated_position.is_none() && self.ensure_minimum_items() {
            self.focus.clear_pre_check_snapshot();
            return;
        }

        let outcome = {
            let store = self.platform.store();
            self.focus
                .item_checked_or_unchecked(position, updated_position, updated.is_checked, &*store)
        };
        self.apply_outcome(outcome);
    }

    /// Places a just-checked item per the checked policy
    ///
    /// Returns the destination index, or `None` when the policy deleted
    /// the item.
    fn place_checked_item(&mut self, item: ChecklistItem, original_index: usize) -> Option<usize> {
        match self.config.checked_item_policy {
            CheckedItemPolicy::Delete => {
                self.soft_deleted.insert(
                    item.id,
                    SoftDeleteEntry {
                        item: item.clone(),
                        original_index,
                    },
                );
                self.platform.deletions().item_deleted(&item.text, item.id);
                None
            }
            CheckedItemPolicy::MoveToTopOfChecked => {
                let store = self.platform.store();
                let destination = position::first_index(&*store, |e| e.is_item_checked(true))
                    .or_else(|| position::marker_index(&*store).map(|m| m + 1))
                    .unwrap_or_else(|| store.count())
                    .min(store.count());
                store.insert_at(ListEntry::Item(item), destination);
                Some(destination)
            }
            CheckedItemPolicy::MoveToBottomOfChecked => {
                let store = self.platform.store();
                let destination = store.count();
                store.insert_at(ListEntry::Item(item), destination);
                Some(destination)
            }
        }
    }

    /// Places a just-unchecked item per the unchecked policy
    fn place_unchecked_item(&mut self, item: ChecklistItem) -> usize {
        let destination = match self.config.unchecked_item_policy {
            UncheckedItemPolicy::MoveToPreviousPosition => {
                let marker = position::marker_index(self.platform.store()).unwrap_or(0);
                match self.previous_positions.remove(&item.id) {
                    Some(recorded) => recorded.min(marker),
                    None => marker,
                }
            }
            UncheckedItemPolicy::MoveToBottomOfUnchecked => {
                position::marker_index(self.platform.store()).unwrap_or(0)
            }
            UncheckedItemPolicy::MoveToTopOfUnchecked => 0,
        };
        self.platform
            .store()
            .insert_at(ListEntry::Item(item), destination);
        destination
    }

    /// Restores a previously soft-deleted item
    ///
    /// The reinsertion index is clamped into the correct side of the
    /// marker for the item's checked flag. Returns false when no entry
    /// exists for `id`.
    pub fn restore_deleted_item(&mut self, id: ItemId) -> bool {
        let Some(entry) = self.soft_deleted.remove(&id) else {
            tracing::warn!(%id, "restore requested for an unknown item");
            return false;
        };
        let store = self.platform.store();
        let marker = position::marker_index(&*store).unwrap_or(0);
        let index = if entry.item.is_checked {
            entry.original_index.clamp(marker + 1, store.count())
        } else {
            entry.original_index.min(marker)
        };
        store.insert_at(ListEntry::Item(entry.item), index);
        tracing::debug!(%id, index, "soft-deleted item restored");
        true
    }

    /// Removes every checked item in one pass
    ///
    /// Each removed item is soft-deleted; the returned ids can be passed
    /// to [`restore_deleted_item`](Self::restore_deleted_item) for undo.
    /// The per-item deletion listener is not invoked on this bulk path.
    pub fn remove_all_checked_items(&mut self) -> Vec<ItemId> {
        let mut kept = Vec::new();
        let mut removed_ids = Vec::new();
        let mut removed_positions = Vec::new();

        let store = self.platform.store();
        for i in 0..store.count() {
            match store.get(i) {
                Some(ListEntry::Item(item)) if item.is_checked => {
                    removed_positions.push(i);
                    removed_ids.push(item.id);
                    self.soft_deleted.insert(
                        item.id,
                        SoftDeleteEntry {
                            item: item.clone(),
                            original_index: i,
                        },
                    );
                }
                Some(entry) => kept.push(entry.clone()),
                None => {}
            }
        }
        self.platform.store().replace_all(kept);
        tracing::debug!(removed = removed_ids.len(), "all checked items removed");

        self.ensure_minimum_items();
        let outcome = self.focus.all_checked_items_removed(&removed_positions);
        self.apply_outcome(outcome);
        removed_ids
    }

    /// Unchecks every checked item as if unchecked individually
    ///
    /// Returns true when at least one item was affected.
    pub fn uncheck_all_checked_items(&mut self) -> bool {
        let mut any = false;
        while let Some(pos) =
            position::first_index(self.platform.store(), |e| e.is_item_checked(true))
        {
            self.set_checked_state(pos, false);
            any = true;
        }
        any
    }

    /// A drag gesture started
    ///
    /// Hides the keyboard, resets focus tracking, and drops any pending
    /// deferred focus request so it cannot fire mid-drag.
    pub fn on_drag_started(&mut self) {
        self.scheduler.cancel();
        let outcome = self.focus.drag_started();
        self.apply_outcome(outcome);
    }

    /// Moves the entry at `from` to `to` via an adjacent-swap walk
    ///
    /// Intervening entries shift by one, preserving the relative order of
    /// everything strictly between the endpoints. Always accepted.
    pub fn on_item_move(&mut self, from: usize, to: usize) -> bool {
        let store = self.platform.store();
        if from == to || from >= store.count() || to >= store.count() {
            return true;
        }
        if from < to {
            for i in from..to {
                swap_adjacent(store, i);
            }
        } else {
            for i in (to..from).rev() {
                swap_adjacent(store, i);
            }
        }
        tracing::debug!(from, to, "item moved by drag");
        true
    }

    /// Whether a drag from `current` may hover over `target`
    ///
    /// Both endpoints must be unchecked items; crossing the marker or
    /// involving a checked item would break the partition without a
    /// re-sort.
    pub fn can_drag_over_target(&mut self, current: usize, target: usize) -> bool {
        let store = self.platform.store();
        let unchecked = |i: usize| {
            store
                .get(i)
                .map(|e| e.is_item_checked(false))
                .unwrap_or(false)
        };
        unchecked(current) && unchecked(target)
    }

    /// UI reported a focus change
    pub fn on_focus_changed(&mut self, position: usize, selection_start: Option<usize>, has_focus: bool) {
        self.focus.focus_changed(position, selection_start, has_focus);
    }

    /// UI reported a caret/selection change
    pub fn on_selection_changed(
        &mut self,
        position: usize,
        selection_start: Option<usize>,
        has_focus: bool,
    ) {
        self.focus.selection_changed(position, selection_start, has_focus);
    }

    /// Tops the list back up to one real item when it has none
    ///
    /// Returns true when a fresh item was synthesized; it receives focus
    /// through the new-item path.
    fn ensure_minimum_items(&mut self) -> bool {
        let store = self.platform.store();
        if position::item_count(&*store) > 0 {
            return false;
        }
        let index = position::marker_index(&*store).unwrap_or(0);
        store.insert_at(ListEntry::Item(ChecklistItem::new("")), index);
        tracing::warn!("list fell below the minimum item count, synthesized an empty item");

        let outcome = self.focus.new_item_created(index);
        self.apply_outcome(outcome);
        true
    }

    fn apply_outcome(&mut self, outcome: FocusOutcome) {
        match outcome {
            FocusOutcome::None => {}
            FocusOutcome::HideKeyboard => self.platform.focus().hide_keyboard(),
            FocusOutcome::Request(request) => {
                self.platform.focus().scroll_to(request.position);
                self.scheduler.schedule(request, self.config.focus_delay_ms);
            }
        }
    }
}

fn swap_adjacent(store: &mut dyn ListStore, index: usize) {
    if let Some(entry) = store.remove_at(index) {
        store.insert_at(entry, index + 1);
    }
}

fn byte_offset(text: &str, char_offset: usize) -> usize {
    text.char_indices()
        .nth(char_offset)
        .map(|(i, _)| i)
        .unwrap_or(text.len())
}
