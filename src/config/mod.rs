//! Configuration for the checklist store.
//!
//! Everything has a default, so an empty or missing file yields the
//! stock widget: 60-minute finish offset, two seed items, sequential ids.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, IdStrategy, ItemsConfig, LoggingConfig, SeedItem, TimeConfig};
