//! In-process storage backend

use std::collections::HashMap;
use tracing::debug;

use crate::error::{Result, StorageError};
use crate::{Storage, validate_key};

/// Storage held in a map, lost when dropped
///
/// Writes can be switched to fail with [`StorageError::QuotaExceeded`] to
/// exercise callers' handling of a full or unavailable store.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    slots: HashMap<String, String>,
    fail_writes: bool,
    writes: usize,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with one slot
    pub fn with_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut slots = HashMap::new();
        slots.insert(key.into(), value.into());
        Self {
            slots,
            ..Self::default()
        }
    }

    /// Make subsequent writes fail (or succeed again)
    pub fn fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// Number of successful writes so far
    pub fn write_count(&self) -> usize {
        self.writes
    }
}

impl Storage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        validate_key(key)?;
        Ok(self.slots.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        validate_key(key)?;
        if self.fail_writes {
            debug!(key, "write: rejected (fail_writes set)");
            return Err(StorageError::QuotaExceeded { key: key.to_string() });
        }
        self.slots.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }
}
