//! # Storage Layer
//!
//! This module defines the key-value capability a [`SyncedStack`] mirrors its
//! top value into. The [`KvStore`] trait is the seam between the stack's
//! synchronization logic and whatever actually holds the data.
//!
//! ## Design Rationale
//!
//! Storage is abstracted behind a trait to:
//! - Enable **testing** with a journaling double (`RecordingStore`)
//! - Allow **callers to bring their own backend** (database, cache, etc.)
//!   without changing the stack
//! - Keep the synchronization protocol **decoupled** from storage details
//!
//! ## Implementations
//!
//! - [`memory::InMemoryStore`]: `HashMap`-backed store. Strict about the
//!   record lifecycle (`create` over an existing key or `update`/`read`/
//!   `delete` of a missing one is an error), which makes protocol bugs
//!   visible immediately.
//! - [`fs::JsonFileStore`]: single-JSON-file store with atomic writes. This
//!   is the backend that survives a process restart.
//! - `mock::RecordingStore` (behind `test_utils` or `cfg(test)`): records
//!   every call for in-order verification.
//!
//! The stack does not catch, wrap, or retry store failures: an `Err` from any
//! of these methods propagates unmodified to the caller of the stack
//! operation that triggered it.
//!
//! [`SyncedStack`]: crate::stack::SyncedStack

use crate::error::Result;

pub mod fs;
pub mod memory;

#[cfg(any(test, feature = "test_utils"))]
pub mod mock;

/// Abstract key-value capability consumed by the stack.
///
/// Keys are opaque strings (the stack uses its instance id); values are the
/// integers being stacked. `read` is the only method with a return-value
/// contract.
pub trait KvStore {
    /// Create a record for `key`. The stack calls this on the first push.
    fn create(&mut self, key: &str, value: i64) -> Result<()>;

    /// Overwrite the record for `key` with a new top value.
    fn update(&mut self, key: &str, value: i64) -> Result<()>;

    /// Fetch the last value recorded for `key`.
    fn read(&self, key: &str) -> Result<i64>;

    /// Remove the record for `key`. The stack calls this when a pop is about
    /// to empty it.
    fn delete(&mut self, key: &str) -> Result<()>;
}
