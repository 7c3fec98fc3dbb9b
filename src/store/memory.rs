use super::KvStore;
use crate::error::{Result, StackError};
use std::collections::HashMap;

/// In-memory key-value store.
///
/// The reference backend: useful for tests and for callers that want the
/// synchronization protocol without durability. It is deliberately strict —
/// creating over an existing key, or updating/reading/deleting a missing one,
/// is an error rather than a silent upsert, so a stack that issues the wrong
/// call for a transition fails loudly.
pub struct InMemoryStore {
    entries: HashMap<String, i64>,
    simulate_write_error: bool,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
            simulate_write_error: false,
        }
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&mut self, simulate: bool) {
        self.simulate_write_error = simulate;
    }

    /// Current value for `key`, if any. Test/inspection helper.
    pub fn get(&self, key: &str) -> Option<i64> {
        self.entries.get(key).copied()
    }

    /// Number of live records.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn check_writable(&self) -> Result<()> {
        if self.simulate_write_error {
            return Err(StackError::Store("Simulated write error".to_string()));
        }
        Ok(())
    }
}

impl KvStore for InMemoryStore {
    fn create(&mut self, key: &str, value: i64) -> Result<()> {
        self.check_writable()?;
        if self.entries.contains_key(key) {
            return Err(StackError::Store(format!(
                "create over existing key: {key}"
            )));
        }
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    fn update(&mut self, key: &str, value: i64) -> Result<()> {
        self.check_writable()?;
        if !self.entries.contains_key(key) {
            return Err(StackError::KeyNotFound(key.to_string()));
        }
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    fn read(&self, key: &str) -> Result<i64> {
        self.entries
            .get(key)
            .copied()
            .ok_or_else(|| StackError::KeyNotFound(key.to_string()))
    }

    fn delete(&mut self, key: &str) -> Result<()> {
        self.check_writable()?;
        if self.entries.remove(key).is_none() {
            return Err(StackError::KeyNotFound(key.to_string()));
        }
        Ok(())
    }
}
