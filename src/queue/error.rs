//! Queue Error Types
//!
//! Defines error types raised by queue backends. The data holder never adds
//! its own variants; whatever a backend returns reaches the caller as-is.

use thiserror::Error;

/// Result type for queue operations
pub type QueueResult<T> = Result<T, QueueError>;

/// Errors that can occur during queue operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueueError {
    /// Queue has reached its capacity limit
    #[error("Queue is full - capacity of {capacity} items reached")]
    QueueFull { capacity: usize },

    /// Dequeue was attempted on a queue holding no items
    #[error("Queue is empty - nothing to dequeue")]
    Empty,

    /// A test double received a call it was not scripted for
    #[error("Unexpected call to {operation}")]
    UnexpectedCall { operation: String },

    /// Generic queue operation error
    #[error("Queue operation failed: {message}")]
    OperationFailed { message: String },
}

impl QueueError {
    /// Create a queue full error
    pub fn queue_full(capacity: usize) -> Self {
        Self::QueueFull { capacity }
    }

    /// Create an unexpected call error
    pub fn unexpected_call(operation: impl Into<String>) -> Self {
        Self::UnexpectedCall {
            operation: operation.into(),
        }
    }

    /// Create an operation failed error
    pub fn operation_failed(message: impl Into<String>) -> Self {
        Self::OperationFailed {
            message: message.into(),
        }
    }
}
