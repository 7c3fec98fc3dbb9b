use stacksync::error::StackError;
use stacksync::stack::SyncedStack;
use stacksync::store::memory::InMemoryStore;
use stacksync::store::KvStore;

#[test]
fn test_backend_record_tracks_the_top_end_to_end() {
    let mut stack = SyncedStack::with_store(InMemoryStore::new());
    let id = stack.id().to_string();

    // 1. Fresh stack: no record.
    assert!(stack.store().unwrap().is_empty());

    // 2. Pushes: record follows the top.
    stack.push(42).unwrap();
    assert_eq!(stack.store().unwrap().get(&id), Some(42));
    stack.push(69).unwrap();
    assert_eq!(stack.store().unwrap().get(&id), Some(69));

    // 3. Pop with elements remaining: record drops to the new top.
    assert_eq!(stack.pop().unwrap(), 69);
    assert_eq!(stack.store().unwrap().get(&id), Some(42));

    // 4. Emptying pop: record is gone.
    assert_eq!(stack.pop().unwrap(), 42);
    assert_eq!(stack.store().unwrap().get(&id), None);
    assert!(stack.store().unwrap().is_empty());
}

#[test]
fn test_reset_recovers_the_persisted_top() {
    let mut stack = SyncedStack::with_store(InMemoryStore::new());
    stack.push(42).unwrap();
    stack.push(69).unwrap();

    stack.reset().unwrap();

    // The backend held 69, so that is all that survives the rebuild.
    assert_eq!(stack.len(), 1);
    assert_eq!(stack.peek().unwrap(), 69);
}

#[test]
fn test_reset_recovers_a_diverged_backend_value() {
    let mut stack = SyncedStack::with_store(InMemoryStore::new());
    let id = stack.id().to_string();
    stack.push(42).unwrap();
    stack.push(69).unwrap();

    // Someone else moved the record while we were not looking.
    stack.store_mut().unwrap().update(&id, 100).unwrap();

    stack.reset().unwrap();
    assert_eq!(stack.len(), 1);
    assert_eq!(stack.peek().unwrap(), 100);
}

#[test]
fn test_failed_backend_write_leaves_stack_and_record_consistent() {
    let mut stack = SyncedStack::with_store(InMemoryStore::new());
    let id = stack.id().to_string();
    stack.push(1).unwrap();
    stack.push(2).unwrap();

    stack.store_mut().unwrap().set_simulate_write_error(true);
    assert!(matches!(stack.push(3), Err(StackError::Store(_))));
    assert!(matches!(stack.pop(), Err(StackError::Store(_))));

    // Store call fires before the mutation, so nothing moved.
    assert_eq!(stack.len(), 2);
    assert_eq!(stack.peek().unwrap(), 2);
    assert_eq!(stack.store().unwrap().get(&id), Some(2));
}

#[test]
fn test_two_backed_stacks_keep_separate_records() {
    let mut a = SyncedStack::with_store(InMemoryStore::new());
    let mut b = SyncedStack::with_store(InMemoryStore::new());
    assert_ne!(a.id(), b.id());

    a.push(1).unwrap();
    b.push(2).unwrap();
    assert_eq!(a.store().unwrap().get(a.id()), Some(1));
    assert_eq!(b.store().unwrap().get(b.id()), Some(2));
}
