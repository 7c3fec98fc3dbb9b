use super::KvStore;
use crate::error::{Result, StackError};
use std::cell::{Cell, RefCell};

/// One recorded port call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreCall {
    Create { key: String, value: i64 },
    Update { key: String, value: i64 },
    Read { key: String },
    Delete { key: String },
}

/// Journaling test double for [`KvStore`].
///
/// Records every call in order and answers `read` with a stubbed value, so
/// tests can verify exactly which port calls a stack operation issued and in
/// what sequence. Uses `RefCell`/`Cell` for interior mutability since the
/// crate is single-threaded and `read` takes `&self`.
pub struct RecordingStore {
    calls: RefCell<Vec<StoreCall>>,
    read_value: i64,
    fail_writes: Cell<bool>,
}

impl Default for RecordingStore {
    fn default() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            read_value: 0,
            fail_writes: Cell::new(false),
        }
    }
}

impl RecordingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stub the value `read` returns.
    pub fn with_read_value(mut self, value: i64) -> Self {
        self.read_value = value;
        self
    }

    /// Make create/update/delete fail, for error-path tests.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    /// Snapshot of the call journal.
    pub fn calls(&self) -> Vec<StoreCall> {
        self.calls.borrow().clone()
    }

    fn check_writable(&self) -> Result<()> {
        if self.fail_writes.get() {
            return Err(StackError::Store("Simulated write error".to_string()));
        }
        Ok(())
    }
}

impl KvStore for RecordingStore {
    fn create(&mut self, key: &str, value: i64) -> Result<()> {
        self.check_writable()?;
        self.calls.borrow_mut().push(StoreCall::Create {
            key: key.to_string(),
            value,
        });
        Ok(())
    }

    fn update(&mut self, key: &str, value: i64) -> Result<()> {
        self.check_writable()?;
        self.calls.borrow_mut().push(StoreCall::Update {
            key: key.to_string(),
            value,
        });
        Ok(())
    }

    fn read(&self, key: &str) -> Result<i64> {
        self.calls.borrow_mut().push(StoreCall::Read {
            key: key.to_string(),
        });
        Ok(self.read_value)
    }

    fn delete(&mut self, key: &str) -> Result<()> {
        self.check_writable()?;
        self.calls.borrow_mut().push(StoreCall::Delete {
            key: key.to_string(),
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn journal_preserves_call_order() {
        let mut store = RecordingStore::new().with_read_value(7);
        store.create("k", 1).unwrap();
        store.update("k", 2).unwrap();
        assert_eq!(store.read("k").unwrap(), 7);
        store.delete("k").unwrap();

        assert_eq!(
            store.calls(),
            vec![
                StoreCall::Create {
                    key: "k".into(),
                    value: 1
                },
                StoreCall::Update {
                    key: "k".into(),
                    value: 2
                },
                StoreCall::Read { key: "k".into() },
                StoreCall::Delete { key: "k".into() },
            ]
        );
    }

    #[test]
    fn failing_writes_are_not_journaled() {
        let mut store = RecordingStore::new();
        store.set_fail_writes(true);
        assert!(store.create("k", 1).is_err());
        assert!(store.calls().is_empty());
    }
}
