//! Item id generation.
//!
//! Ids are handed to the reducer as a dependency so that uniqueness holds
//! by construction and tests can predict them.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::checklist::ItemId;

/// Source of fresh item ids.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> ItemId;
}

/// Monotonic counter: `item-1`, `item-2`, ...
#[derive(Debug)]
pub struct SequentialIds {
    prefix: String,
    next: AtomicU64,
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: AtomicU64::new(1),
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new("item-")
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> ItemId {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        ItemId::new(format!("{}{}", self.prefix, n))
    }
}

/// Random v4 UUIDs in simple (hyphenless) form.
#[derive(Debug, Default)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next_id(&self) -> ItemId {
        ItemId::new(uuid::Uuid::new_v4().simple().to_string())
    }
}
