//! Read-only position queries over the list store
//!
//! Pure projections over the current store snapshot. Nothing here is
//! cached; the store can mutate between calls, so every query rescans.

use crate::store::ListStore;
use checklist_types::ListEntry;

/// Counts entries matching `pred`
pub fn count_matching<F>(store: &dyn ListStore, pred: F) -> usize
where
    F: Fn(&ListEntry) -> bool,
{
    (0..store.count())
        .filter(|&i| store.get(i).map(&pred).unwrap_or(false))
        .count()
}

/// Index of the first entry matching `pred`, if any
pub fn first_index<F>(store: &dyn ListStore, pred: F) -> Option<usize>
where
    F: Fn(&ListEntry) -> bool,
{
    (0..store.count()).find(|&i| store.get(i).map(&pred).unwrap_or(false))
}

/// Index of the last entry matching `pred`, if any
pub fn last_index<F>(store: &dyn ListStore, pred: F) -> Option<usize>
where
    F: Fn(&ListEntry) -> bool,
{
    (0..store.count())
        .rev()
        .find(|&i| store.get(i).map(&pred).unwrap_or(false))
}

/// Index of the marker, if the list has been initialized
pub fn marker_index(store: &dyn ListStore) -> Option<usize> {
    first_index(store, ListEntry::is_marker)
}

/// Number of real items, marker excluded
pub fn item_count(store: &dyn ListStore) -> usize {
    count_matching(store, |e| !e.is_marker())
}
