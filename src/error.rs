use thiserror::Error;

#[derive(Error, Debug)]
pub enum StackError {
    /// The stack is at capacity; pop before pushing again.
    #[error("stack overflow: capacity of {capacity} reached")]
    Overflow { capacity: usize },

    /// pop/peek called on an empty stack.
    #[error("invalid operation: stack is empty")]
    Empty,

    #[error("no record for key: {0}")]
    KeyNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, StackError>;
