//! In-process record storage.

use std::{
    collections::HashMap,
    sync::{Mutex, PoisonError},
};

use super::RecordStorage;
use crate::error::Result;

/// Keeps records in memory for the lifetime of the value.
///
/// A storage made with [`MemoryStorage::new`] is the caller's chosen
/// backend and reports writes as stored. One made with
/// [`MemoryStorage::volatile`] stands in for a database that could not be
/// opened and reports them as [`Persistence::InMemory`](super::Persistence).
#[derive(Debug, Default)]
pub struct MemoryStorage {
    records: Mutex<HashMap<String, String>>,
    volatile: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fallback storage whose writes are reported as not outliving the
    /// process.
    pub fn volatile() -> Self {
        Self {
            records: Mutex::default(),
            volatile: true,
        }
    }
}

impl RecordStorage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let records = self.records.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(records.get(key).cloned())
    }

    fn write(&self, key: &str, body: &str) -> Result<()> {
        let mut records = self.records.lock().unwrap_or_else(PoisonError::into_inner);
        records.insert(key.to_string(), body.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut records = self.records.lock().unwrap_or_else(PoisonError::into_inner);
        records.remove(key);
        Ok(())
    }

    fn is_durable(&self) -> bool {
        !self.volatile
    }
}
