//! # stacksync
//!
//! A bounded integer stack whose top value is mirrored into an external
//! key-value store, so the most recent state can be recovered after a
//! restart. This is a **synchronization library, not a persistent
//! collection**: only the top of the stack is ever persisted, and the whole
//! design lives in which store call fires on which transition.
//!
//! ## The protocol
//!
//! Each stack mints a unique string id at construction and uses it as its
//! persistence key. Every state-changing operation issues exactly one store
//! call, selected by the transition:
//!
//! ```text
//! {no record} --push--> create(id, v)   --> {record = v}
//! {record}    --push--> update(id, v')  --> {record = v'}
//! {record, len > 1} --pop--> update(id, below) --> {record = below}
//! {record, len == 1} --pop--> delete(id)       --> {no record}
//! {record, len > 0} --reset--> read(id)        --> stack rebuilt as [read value]
//! ```
//!
//! The store call always precedes the in-memory mutation, and store failures
//! propagate to the caller untouched — the stack selects and orders calls,
//! it does not guarantee their success.
//!
//! ## Layers
//!
//! - [`stack`]: `SyncedStack<S>`, the bounded stack and its sync logic
//! - [`store`]: the `KvStore` trait plus the shipped backends
//!   (`InMemoryStore`, `JsonFileStore`) and the journaling test double
//! - [`error`]: `StackError` and the crate-wide `Result` alias
//!
//! ## Example
//!
//! ```
//! use stacksync::stack::SyncedStack;
//! use stacksync::store::memory::InMemoryStore;
//!
//! let mut stack = SyncedStack::with_store(InMemoryStore::new());
//! stack.push(42)?;
//! stack.push(69)?;
//! // The backend always holds the current top.
//! assert_eq!(stack.store().unwrap().get(stack.id()), Some(69));
//!
//! assert_eq!(stack.pop()?, 69);
//! assert_eq!(stack.store().unwrap().get(stack.id()), Some(42));
//! # Ok::<(), stacksync::error::StackError>(())
//! ```
//!
//! A stack constructed without a store (`SyncedStack::new()`) is a plain
//! bounded stack and never touches a backend.

pub mod error;
pub mod stack;
pub mod store;
