//! The synchronized stack.
//!
//! A `SyncedStack` is a bounded LIFO of integers. When it is constructed with
//! a backing [`KvStore`], every state-changing operation issues exactly one
//! store call, chosen by which transition occurred:
//!
//! - first push → `create(id, value)`
//! - later push → `update(id, value)`
//! - pop leaving elements behind → `update(id, new_top)`
//! - pop emptying the stack → `delete(id)`
//! - reset of a non-empty stack → `read(id)`
//!
//! The store call always fires *before* the in-memory mutation, so a failing
//! backend leaves the stack exactly as it was. Only the top value is ever
//! mirrored — this is top-of-stack recovery, not full-contents persistence.

use crate::error::{Result, StackError};
use crate::store::memory::InMemoryStore;
use crate::store::KvStore;
use uuid::Uuid;

/// Capacity used by the plain constructors.
pub const DEFAULT_CAPACITY: usize = 10;

/// A fixed-capacity integer stack that mirrors its top value into an
/// optional key-value store.
///
/// Generic over the backend so production code and tests pick their store by
/// type: `SyncedStack<JsonFileStore>`, `SyncedStack<InMemoryStore>`, or an
/// unbacked `SyncedStack::new()` that never touches a store.
pub struct SyncedStack<S = InMemoryStore> {
    capacity: usize,
    elements: Vec<i64>,
    id: String,
    store: Option<S>,
}

impl SyncedStack {
    /// An unbacked stack with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// An unbacked stack holding at most `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::build(capacity, None)
    }
}

impl Default for SyncedStack {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> SyncedStack<S> {
    /// A backed stack with the default capacity.
    pub fn with_store(store: S) -> Self {
        Self::build(DEFAULT_CAPACITY, Some(store))
    }

    /// A backed stack holding at most `capacity` elements.
    pub fn with_store_and_capacity(store: S, capacity: usize) -> Self {
        Self::build(capacity, Some(store))
    }

    fn build(capacity: usize, store: Option<S>) -> Self {
        Self {
            capacity,
            elements: Vec::with_capacity(capacity),
            id: Uuid::new_v4().to_string(),
            store,
        }
    }

    /// The persistence key for this instance: generated once at construction,
    /// unique per stack, stable for its lifetime.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.elements.len() == self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The current top value without removing it. No store interaction.
    pub fn peek(&self) -> Result<i64> {
        self.elements.last().copied().ok_or(StackError::Empty)
    }

    /// The backing store, if this stack has one.
    pub fn store(&self) -> Option<&S> {
        self.store.as_ref()
    }

    pub fn store_mut(&mut self) -> Option<&mut S> {
        self.store.as_mut()
    }

    /// Consume the stack, handing back its store.
    pub fn into_store(self) -> Option<S> {
        self.store
    }
}

impl<S: KvStore> SyncedStack<S> {
    /// Push `value`, mirroring it to the store first.
    ///
    /// Fails with [`StackError::Overflow`] when the stack is full; no store
    /// call and no mutation happen in that case.
    pub fn push(&mut self, value: i64) -> Result<()> {
        if self.is_full() {
            return Err(StackError::Overflow {
                capacity: self.capacity,
            });
        }

        if let Some(store) = self.store.as_mut() {
            if self.elements.is_empty() {
                store.create(&self.id, value)?;
            } else {
                store.update(&self.id, value)?;
            }
        }

        self.elements.push(value);
        Ok(())
    }

    /// Remove and return the top value, telling the store about the new top
    /// first: `delete` when this pop empties the stack, `update` with the
    /// element below otherwise.
    ///
    /// Fails with [`StackError::Empty`] on an empty stack; no store call and
    /// no mutation happen in that case.
    pub fn pop(&mut self) -> Result<i64> {
        let top = *self.elements.last().ok_or(StackError::Empty)?;

        if let Some(store) = self.store.as_mut() {
            if self.elements.len() == 1 {
                store.delete(&self.id)?;
            } else {
                let below = self.elements[self.elements.len() - 2];
                store.update(&self.id, below)?;
            }
        }

        self.elements.pop();
        Ok(top)
    }

    /// Reload the last persisted top value and rebuild the stack around it.
    ///
    /// A no-op (zero store calls) when there is no store or the stack is
    /// empty. Otherwise issues exactly one `read(id)`, discards the current
    /// contents, and leaves a single-element stack holding the fetched value.
    /// Everything below the old top is lost: only the top value is ever
    /// persisted, so a single-value rebuild is all the backend can support.
    /// This is the documented recovery contract, not an oversight.
    pub fn reset(&mut self) -> Result<()> {
        if let Some(store) = &self.store {
            if !self.elements.is_empty() {
                let last_top = store.read(&self.id)?;
                self.elements.clear();
                self.elements.push(last_top);
            }
        }
        Ok(())
    }
}
