//! Engine behavior configuration
//!
//! Policies select where an item lands after its checked state changes;
//! the remaining fields tune ambient behavior (focus delay, export
//! defaults). Everything is serializable so a host can persist its
//! configuration through the persistence module.

use serde::{Deserialize, Serialize};

/// Nominal delay before a deferred focus request is delivered
///
/// One layout pass of a typical host; a tunable, not a correctness value.
pub const DEFAULT_FOCUS_DELAY_MS: u64 = 100;

/// Where a just-checked item lands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CheckedItemPolicy {
    /// Move above existing checked items, directly under the marker
    MoveToTopOfChecked,
    /// Move below all other entries
    MoveToBottomOfChecked,
    /// Remove the item (soft-deleted, restorable)
    Delete,
}

/// Where a just-unchecked item lands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UncheckedItemPolicy {
    /// Return to the position recorded when the item was checked
    MoveToPreviousPosition,
    /// Move to the bottom of the unchecked region
    MoveToBottomOfUnchecked,
    /// Move to the top of the list
    MoveToTopOfUnchecked,
}

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Destination rule for checked items
    pub checked_item_policy: CheckedItemPolicy,
    /// Destination rule for unchecked items
    pub unchecked_item_policy: UncheckedItemPolicy,
    /// Delay before deferred focus requests are delivered
    pub focus_delay_ms: u64,
    /// Default for emitting checkbox prefixes on export
    pub keep_checkbox_symbols: bool,
    /// Default for including checked items on export
    pub keep_checked_items: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            checked_item_policy: CheckedItemPolicy::MoveToTopOfChecked,
            unchecked_item_policy: UncheckedItemPolicy::MoveToPreviousPosition,
            focus_delay_ms: DEFAULT_FOCUS_DELAY_MS,
            keep_checkbox_symbols: true,
            keep_checked_items: true,
        }
    }
}
