//! Checklist Flow Test Utilities
//!
//! This crate provides shared utilities for end-to-end checklist flow tests.
//!
//! ## Test Philosophy
//!
//! - **Whole flows**: Tests drive the engine through multi-step user
//!   sessions, not single handler calls
//! - **Invariant checks**: The unchecked/marker/checked partition must hold
//!   after every step
//! - **Deterministic time**: Deferred focus is delivered by explicit ticks,
//!   never by sleeping

use checklist_engine::platform::FakeChecklistPlatform;
use checklist_engine::{ChecklistEngine, EngineConfig};
use checklist_types::ListEntry;

/// Builds an engine preloaded from `text` with recording cleared
///
/// The initial-load focus request is drained so tests observe only the
/// effects of the steps they perform.
pub fn engine_from_text(text: &str) -> ChecklistEngine<FakeChecklistPlatform> {
    engine_with_config(text, EngineConfig::default())
}

/// Builds an engine with an explicit configuration, preloaded from `text`
pub fn engine_with_config(
    text: &str,
    config: EngineConfig,
) -> ChecklistEngine<FakeChecklistPlatform> {
    let mut engine = ChecklistEngine::with_config(FakeChecklistPlatform::new(), config);
    engine.set_items(text);
    deliver_focus(&mut engine);
    engine.platform_mut().reset_recording();
    engine
}

/// Renders the list as `"text"`, `"[x] text"`, and `"<marker>"` strings
pub fn layout(engine: &ChecklistEngine<FakeChecklistPlatform>) -> Vec<String> {
    engine
        .platform()
        .entries()
        .iter()
        .map(|entry| match entry {
            ListEntry::Marker => "<marker>".to_string(),
            ListEntry::Item(item) if item.is_checked => format!("[x] {}", item.text),
            ListEntry::Item(item) => item.text.clone(),
        })
        .collect()
}

/// Advances logical time by exactly the configured focus delay
pub fn deliver_focus(engine: &mut ChecklistEngine<FakeChecklistPlatform>) {
    let delay = engine.config().focus_delay_ms;
    engine.tick(delay);
}

/// Asserts that every unchecked item sits before the marker and every
/// checked item after it
pub fn assert_partitioned(engine: &ChecklistEngine<FakeChecklistPlatform>) {
    let entries = engine.platform().entries();
    let marker = entries
        .iter()
        .position(ListEntry::is_marker)
        .expect("list must contain the marker");
    for (i, entry) in entries.iter().enumerate() {
        if let Some(item) = entry.as_item() {
            if item.is_checked {
                assert!(i > marker, "checked item {:?} at {} before marker", item.text, i);
            } else {
                assert!(i < marker, "unchecked item {:?} at {} after marker", item.text, i);
            }
        }
    }
}
