//! # Checklist Engine
//!
//! A platform-agnostic engine for interactive checklist lists.
//!
//! ## Philosophy
//!
//! - **Host-driven**: The engine never touches a UI toolkit; hosts implement
//!   [`ChecklistPlatform`] and forward user gestures
//! - **Deterministic**: No wall clock, no threads; deferred focus is driven
//!   by explicit [`ChecklistEngine::tick`] calls
//! - **Invariant-keeping**: Unchecked items, the new-item marker, then
//!   checked items, after every mutation
//! - **Configurable**: Landing positions for checked/unchecked items are
//!   policies, not hardcoded behavior
//! - **Testable**: A recording fake platform ships with the crate
//!
//! ## Features
//!
//! - Check/uncheck with configurable landing policies
//! - Soft deletion with restore
//! - Enter-key item splitting, delete-key merging focus rules
//! - Bulk operations (remove all checked, uncheck all)
//! - Drag reordering within the unchecked region
//! - Versioned JSON persistence of the configuration
//!
//! ## Example
//!
//! ```ignore
//! use checklist_engine::{ChecklistEngine, EngineConfig};
//! use checklist_engine::platform::fake::FakeChecklistPlatform;
//!
//! let platform = FakeChecklistPlatform::new();
//! let mut engine = ChecklistEngine::new(platform);
//!
//! engine.set_items("[ ] milk\n[x] bread");
//! engine.on_checked(0);
//! engine.tick(200);
//!
//! let text = engine.get_formatted_text_default();
//! ```

pub mod config;
pub mod deferred;
pub mod engine;
pub mod focus;
pub mod order;
pub mod persistence;
pub mod platform;
pub mod position;
pub mod store;

pub use config::{CheckedItemPolicy, EngineConfig, UncheckedItemPolicy, DEFAULT_FOCUS_DELAY_MS};
pub use deferred::FocusScheduler;
pub use engine::{ChecklistEngine, SoftDeleteEntry};
pub use focus::{
    FocusOutcome, FocusRecord, FocusRequest, FocusTracker, SELECTION_END_OF_TEXT,
};
pub use persistence::{
    deserialize_config, load_config_safe, serialize_config, ConfigError, ConfigResult,
    EngineConfigData,
};
pub use platform::{ChecklistPlatform, DeletionListener, FocusSink};
pub use store::{ListStore, VecListStore};
