//! Ordering comparator for list entries
//!
//! Total order enforcing the list partition: unchecked items first, then
//! the marker, then checked items. Item-vs-item comparisons only look at
//! the checked flag, so a stable sort keeps the relative order of items
//! within each partition.
//!
//! The comparator is applied once, when an initial list is materialized
//! from decoded text. Later single-item moves are computed directly by the
//! engine so unrelated items are never disturbed.

use checklist_types::ListEntry;
use std::cmp::Ordering;

fn rank(entry: &ListEntry) -> u8 {
    match entry {
        ListEntry::Item(item) if !item.is_checked => 0,
        ListEntry::Marker => 1,
        ListEntry::Item(_) => 2,
    }
}

/// Compares two entries by partition rank
///
/// Equal ranks compare as `Equal`; callers must use a stable sort to keep
/// the original relative order of ties.
pub fn compare_entries(a: &ListEntry, b: &ListEntry) -> Ordering {
    rank(a).cmp(&rank(b))
}

/// Stable-sorts entries into partition order
pub fn sort_entries(entries: &mut [ListEntry]) {
    entries.sort_by(compare_entries);
}
