//! Ordered list store interface
//!
//! The engine never holds its own copy of the list order. Every read and
//! mutation goes through [`ListStore`], so a host can back the list with
//! whatever container its UI layer already owns. [`VecListStore`] is the
//! provided in-memory implementation.

use checklist_types::ListEntry;

/// Ordered container of list entries
///
/// Indices are positions in the visible list. Out-of-range operations are
/// silent no-ops except `remove_at`, which reports the miss via `None`.
pub trait ListStore {
    /// Inserts an entry at `index`, shifting later entries right
    ///
    /// An index past the end appends.
    fn insert_at(&mut self, entry: ListEntry, index: usize);

    /// Removes and returns the entry at `index`
    fn remove_at(&mut self, index: usize) -> Option<ListEntry>;

    /// Replaces the entry at `index` in place
    fn replace_at(&mut self, entry: ListEntry, index: usize);

    /// Replaces the entire contents with `entries`
    fn replace_all(&mut self, entries: Vec<ListEntry>);

    /// Number of entries, marker included
    fn count(&self) -> usize;

    /// Returns the entry at `index`, if any
    fn get(&self, index: usize) -> Option<&ListEntry>;
}

/// In-memory list store backed by a `Vec`
#[derive(Debug, Default)]
pub struct VecListStore {
    entries: Vec<ListEntry>,
}

impl VecListStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Returns the current entries as a slice
    pub fn entries(&self) -> &[ListEntry] {
        &self.entries
    }
}

impl ListStore for VecListStore {
    fn insert_at(&mut self, entry: ListEntry, index: usize) {
        let index = index.min(self.entries.len());
        self.entries.insert(index, entry);
    }

    fn remove_at(&mut self, index: usize) -> Option<ListEntry> {
        if index < self.entries.len() {
            Some(self.entries.remove(index))
        } else {
            None
        }
    }

    fn replace_at(&mut self, entry: ListEntry, index: usize) {
        if let Some(slot) = self.entries.get_mut(index) {
            *slot = entry;
        }
    }

    fn replace_all(&mut self, entries: Vec<ListEntry>) {
        self.entries = entries;
    }

    fn count(&self) -> usize {
        self.entries.len()
    }

    fn get(&self, index: usize) -> Option<&ListEntry> {
        self.entries.get(index)
    }
}
