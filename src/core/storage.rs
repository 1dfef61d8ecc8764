//! Durable slot storage used by the preference store.

use crate::errors::AppResult;
use std::collections::HashMap;

/// Capability to read and write opaque payloads under a key.
pub trait Storage {
    /// Return the payload stored under `key`, if any.
    fn load(&self, key: &str) -> AppResult<Option<Vec<u8>>>;

    /// Overwrite the payload stored under `key`.
    fn save(&mut self, key: &str, bytes: &[u8]) -> AppResult<()>;
}

impl<S: Storage + ?Sized> Storage for Box<S> {
    fn load(&self, key: &str) -> AppResult<Option<Vec<u8>>> {
        (**self).load(key)
    }

    fn save(&mut self, key: &str, bytes: &[u8]) -> AppResult<()> {
        (**self).save(key, bytes)
    }
}

/// Volatile storage: survives only as long as the value itself.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    slots: HashMap<String, Vec<u8>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a slot, e.g. with a payload written by a previous run.
    pub fn with_slot(mut self, key: &str, bytes: impl Into<Vec<u8>>) -> Self {
        self.slots.insert(key.to_string(), bytes.into());
        self
    }

    pub fn slot(&self, key: &str) -> Option<&[u8]> {
        self.slots.get(key).map(Vec::as_slice)
    }
}

impl Storage for MemoryStorage {
    fn load(&self, key: &str) -> AppResult<Option<Vec<u8>>> {
        Ok(self.slots.get(key).cloned())
    }

    fn save(&mut self, key: &str, bytes: &[u8]) -> AppResult<()> {
        self.slots.insert(key.to_string(), bytes.to_vec());
        Ok(())
    }
}
