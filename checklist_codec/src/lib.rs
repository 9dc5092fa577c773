#![no_std]

//! # Checklist Codec
//!
//! Converts between the line-oriented plain-text checklist format and
//! sequences of [`ChecklistItem`].
//!
//! ## Philosophy
//!
//! - **Lossless on malformed input**: Lines without a recognized checkbox
//!   prefix are preserved verbatim as unchecked items, never rejected.
//! - **Pure**: Both directions are side-effect-free functions with no
//!   failure modes. Empty input yields an empty sequence or string.
//! - **Order-preserving**: Decode emits items in input line order; sorting
//!   is the engine's concern, not the codec's.
//!
//! ## Format
//!
//! UTF-8, `\n`-separated lines. Each line is either `"[ ] "` + text
//! (unchecked), `"[x] "` / `"[X] "` + text (checked), or raw text with no
//! recognized prefix (unchecked, kept verbatim). Empty lines produce no
//! item. Encoded output carries no trailing newline.
//!
//! ## Example
//!
//! ```ignore
//! use checklist_codec::{decode, encode};
//!
//! let items = decode("[ ] Buy milk\n[x] Buy eggs");
//! assert_eq!(items.len(), 2);
//!
//! let text = encode(&items, true, true);
//! assert_eq!(text, "[ ] Buy milk\n[x] Buy eggs");
//! ```

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use checklist_types::ChecklistItem;

/// Prefix marking an unchecked line
pub const UNCHECKED_PREFIX: &str = "[ ] ";

/// Prefix marking a checked line
pub const CHECKED_PREFIX: &str = "[x] ";

/// Uppercase variant of the checked prefix, accepted on decode only
const CHECKED_PREFIX_UPPER: &str = "[X] ";

/// Decodes plain text into checklist items, one per non-empty line
///
/// Lines carrying a recognized 4-character prefix have it stripped; any
/// other non-empty line becomes an unchecked item with the whole line as
/// text. Output order matches input line order.
pub fn decode(text: &str) -> Vec<ChecklistItem> {
    let mut items = Vec::new();
    for line in text.split('\n') {
        if let Some(rest) = line.strip_prefix(UNCHECKED_PREFIX) {
            items.push(ChecklistItem::new(rest));
        } else if let Some(rest) = line
            .strip_prefix(CHECKED_PREFIX)
            .or_else(|| line.strip_prefix(CHECKED_PREFIX_UPPER))
        {
            items.push(ChecklistItem::new_checked(rest, true));
        } else if !line.is_empty() {
            items.push(ChecklistItem::new(line));
        }
    }
    items
}

/// Encodes checklist items into plain text
///
/// Items are emitted in slice order. Checked items are skipped when
/// `keep_checked_items` is false. Empty-text items are skipped when more
/// than one item exists, so a single stray blank entry does not produce a
/// spurious line; a lone empty item still encodes (to an empty string when
/// symbols are off). No trailing newline is appended.
pub fn encode(items: &[ChecklistItem], keep_checkbox_symbols: bool, keep_checked_items: bool) -> String {
    let total = items.len();
    let mut lines: Vec<String> = Vec::new();
    for item in items {
        if !keep_checked_items && item.is_checked {
            continue;
        }
        if item.text.is_empty() && total > 1 {
            continue;
        }
        let mut line = String::new();
        if keep_checkbox_symbols {
            line.push_str(if item.is_checked {
                CHECKED_PREFIX
            } else {
                UNCHECKED_PREFIX
            });
        }
        line.push_str(&item.text);
        lines.push(line);
    }
    lines.join("\n")
}
