//! Best-effort persistence of the plan draft and the latest plan.
//!
//! Both records go through a [`RecordStorage`] capability. The stores on top
//! of it never fail: a storage error or a malformed record degrades to
//! in-memory operation and is only logged. Callers get a [`Persistence`]
//! value they are free to ignore.
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use beaute_core::{
//!     models::PlanDraft,
//!     store::{DraftStore, MemoryStorage},
//! };
//!
//! let store = DraftStore::new(Arc::new(MemoryStorage::new()));
//! let mut draft = PlanDraft::default();
//! draft.monthly_budget = 30000;
//!
//! store.save(&draft);
//! assert_eq!(store.load(), draft);
//!
//! store.clear();
//! assert_eq!(store.load(), PlanDraft::default());
//! ```

use std::sync::Arc;

use log::{debug, warn};
use serde::{de::DeserializeOwned, Serialize};

use crate::{
    error::Result,
    models::{PlanDraft, PlanResult},
};

pub mod memory;
pub mod sqlite;

pub use memory::MemoryStorage;
pub use sqlite::SqliteStorage;

/// Record name of the persisted draft.
pub const DRAFT_KEY: &str = "beauteos_plan_draft";

/// Record name of the persisted latest plan.
pub const LATEST_PLAN_KEY: &str = "beauteos_latest_plan";

/// Key/value storage for serialized records.
///
/// Implementations report failures; the stores decide to swallow them.
pub trait RecordStorage: Send + Sync {
    /// Returns the body stored under `key`, or `None` when absent.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Stores `body` under `key`, replacing any previous body.
    fn write(&self, key: &str, body: &str) -> Result<()>;

    /// Removes the record under `key`. Removing a missing record succeeds.
    fn remove(&self, key: &str) -> Result<()>;

    /// Whether records outlive the process.
    fn is_durable(&self) -> bool {
        true
    }
}

impl<S: RecordStorage + ?Sized> RecordStorage for Arc<S> {
    fn read(&self, key: &str) -> Result<Option<String>> {
        (**self).read(key)
    }

    fn write(&self, key: &str, body: &str) -> Result<()> {
        (**self).write(key, body)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }

    fn is_durable(&self) -> bool {
        (**self).is_durable()
    }
}

/// Outcome of a best-effort write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Persistence {
    /// The storage accepted the change
    Stored,
    /// Accepted by a storage that does not outlive the process
    InMemory,
    /// The storage failed; the in-memory state stays authoritative
    Degraded,
}

impl Persistence {
    pub fn is_stored(&self) -> bool {
        matches!(self, Persistence::Stored)
    }
}

fn read_json<T: DeserializeOwned>(storage: &dyn RecordStorage, key: &str) -> Option<T> {
    match storage.read(key) {
        Ok(Some(body)) => match serde_json::from_str(&body) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Ignoring malformed record '{key}': {e}");
                None
            }
        },
        Ok(None) => None,
        Err(e) => {
            warn!("Failed to read record '{key}': {e}");
            None
        }
    }
}

fn accepted(storage: &dyn RecordStorage) -> Persistence {
    if storage.is_durable() {
        Persistence::Stored
    } else {
        Persistence::InMemory
    }
}

fn write_json<T: Serialize>(storage: &dyn RecordStorage, key: &str, value: &T) -> Persistence {
    let body = match serde_json::to_string(value) {
        Ok(body) => body,
        Err(e) => {
            warn!("Failed to serialize record '{key}': {e}");
            return Persistence::Degraded;
        }
    };
    match storage.write(key, &body) {
        Ok(()) => {
            debug!("Stored record '{key}'");
            accepted(storage)
        }
        Err(e) => {
            warn!("Failed to store record '{key}': {e}");
            Persistence::Degraded
        }
    }
}

fn remove_record(storage: &dyn RecordStorage, key: &str) -> Persistence {
    match storage.remove(key) {
        Ok(()) => {
            debug!("Removed record '{key}'");
            accepted(storage)
        }
        Err(e) => {
            warn!("Failed to remove record '{key}': {e}");
            Persistence::Degraded
        }
    }
}

/// Persists the [`PlanDraft`] across reloads.
#[derive(Clone)]
pub struct DraftStore {
    storage: Arc<dyn RecordStorage>,
}

impl DraftStore {
    pub fn new(storage: Arc<dyn RecordStorage>) -> Self {
        Self { storage }
    }

    /// Returns the stored draft, or the default draft when none is stored,
    /// the record is malformed, or the storage is unavailable.
    pub fn load(&self) -> PlanDraft {
        read_json(self.storage.as_ref(), DRAFT_KEY).unwrap_or_default()
    }

    /// Overwrites the stored draft.
    pub fn save(&self, draft: &PlanDraft) -> Persistence {
        write_json(self.storage.as_ref(), DRAFT_KEY, draft)
    }

    /// Removes the stored draft so the next load yields the default.
    pub fn clear(&self) -> Persistence {
        remove_record(self.storage.as_ref(), DRAFT_KEY)
    }
}

/// Persists the most recent [`PlanResult`].
#[derive(Clone)]
pub struct LatestPlanStore {
    storage: Arc<dyn RecordStorage>,
}

impl LatestPlanStore {
    pub fn new(storage: Arc<dyn RecordStorage>) -> Self {
        Self { storage }
    }

    pub fn load(&self) -> Option<PlanResult> {
        read_json(self.storage.as_ref(), LATEST_PLAN_KEY)
    }

    pub fn save(&self, result: &PlanResult) -> Persistence {
        write_json(self.storage.as_ref(), LATEST_PLAN_KEY, result)
    }
}

#[cfg(test)]
mod tests;
