//! # Checklist Types
//!
//! This crate defines the fundamental types shared across the checklist engine.
//!
//! ## Philosophy
//!
//! - **Items are values**: A [`ChecklistItem`] is never mutated in place;
//!   edits produce a replacement carrying the same [`ItemId`].
//! - **Explicit over implicit**: The marker is a variant of [`ListEntry`],
//!   not a magic item, so every consumer matches exhaustively.
//! - **Stable identity**: Ids are unique for the session and never reused,
//!   so soft-delete and position bookkeeping can key on them safely.
//!
//! ## Key Types
//!
//! - [`ItemId`]: Unique identifier for a checklist item
//! - [`ChecklistItem`]: One checkable line of text
//! - [`ListEntry`]: Either an item or the new-item marker
//!
//! ## Example
//!
//! ```ignore
//! use checklist_types::{ChecklistItem, ListEntry};
//!
//! let item = ChecklistItem::new("Buy milk");
//! let entry = ListEntry::Item(item);
//! assert!(!entry.is_marker());
//! ```

pub mod entry;
pub mod ids;
pub mod item;

pub use entry::ListEntry;
pub use ids::ItemId;
pub use item::ChecklistItem;
