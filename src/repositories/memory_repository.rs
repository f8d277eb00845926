// src/repositories/memory_repository.rs
//
// Volatile key-value store used as a test double for the SQLite slot.
// Reads and writes can be made to fail on demand.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

use crate::error::{AppError, AppResult};
use crate::repositories::KeyValueRepository;

#[derive(Default)]
pub struct InMemoryKeyValueRepository {
    slots: Mutex<HashMap<String, String>>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
    writes: AtomicUsize,
}

impl InMemoryKeyValueRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with one slot already populated
    pub fn with_value(key: &str, value: &str) -> Self {
        let repo = Self::new();
        repo.slots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
        repo
    }

    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Number of successful writes so far
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

impl KeyValueRepository for InMemoryKeyValueRepository {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(AppError::Other(format!("read of '{}' refused", key)));
        }
        let slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(slots.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(AppError::Other(format!("write of '{}' refused", key)));
        }
        self.slots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_and_set() {
        let repo = InMemoryKeyValueRepository::new();
        assert_eq!(repo.get("k").unwrap(), None);
        repo.set("k", "v").unwrap();
        assert_eq!(repo.get("k").unwrap().as_deref(), Some("v"));
        assert_eq!(repo.write_count(), 1);
    }

    #[test]
    fn test_failure_injection() {
        let repo = InMemoryKeyValueRepository::with_value("k", "v");
        repo.set_fail_reads(true);
        repo.set_fail_writes(true);

        assert!(repo.get("k").is_err());
        assert!(repo.set("k", "w").is_err());
        assert_eq!(repo.write_count(), 0);

        repo.set_fail_reads(false);
        assert_eq!(repo.get("k").unwrap().as_deref(), Some("v"));
    }
}
