//! Checklist widget feature module.
//!
//! Holds the logbook / care-plan checklist state: progress indicator,
//! started/finished time chips, active item type, and the item list.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Snapshot rendered by the view, plus selectors
//! - `intent.rs` - Typed user actions
//! - `action.rs` - Untyped actions from the dispatcher, decoded into intents
//! - `reducer.rs` - State transitions (no side effects)
//! - `initial.rs` - Startup snapshot

mod action;
mod initial;
mod intent;
mod reducer;
mod state;

pub use action::{Action, ActionError};
pub use initial::create_initial_state;
pub use intent::ChecklistIntent;
pub use reducer::{ChecklistReducer, NewItemTemplate};
pub use state::{AppState, Item, ItemId, ItemType, Progress, TimeToggle, PROGRESS};
