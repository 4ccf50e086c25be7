//! Queue Capability and Backends
//!
//! This module defines the [`Queue`] capability consumed by
//! [`DataHolder`](crate::holder::DataHolder), together with the backends
//! that satisfy it.
//!
//! # Architecture
//!
//! - **Queue**: two-method capability (`enqueue` / `dequeue`)
//! - **MemoryQueue**: bounded FIFO backend for real use
//! - **MockQueue**: recording test double with scripted results
//!
//! # Usage
//!
//! ```rust
//! use dataholder::queue::{MemoryQueue, Queue};
//!
//! let queue = MemoryQueue::new(10);
//! queue.enqueue(7).unwrap();
//! assert_eq!(queue.dequeue().unwrap(), 7);
//! ```

use std::sync::Arc;

pub mod error;
pub mod memory_queue;
pub mod mock;

#[cfg(test)]
mod tests;

// Re-export main types for convenience
pub use error::{QueueError, QueueResult};
pub use memory_queue::{MemoryQueue, DEFAULT_CAPACITY};
pub use mock::{MockQueue, QueueCall};

/// Opaque integral value moved through a queue
pub type Item = i64;

/// Storage capability: anything that can accept items and hand them back.
///
/// Ordering is implementation-defined (FIFO is conventional), and so is the
/// behaviour of `dequeue` on an empty queue.
pub trait Queue {
    /// Make `item` available to a later `dequeue`
    fn enqueue(&self, item: Item) -> QueueResult<()>;

    /// Take one previously enqueued item
    fn dequeue(&self) -> QueueResult<Item>;
}

impl<Q: Queue + ?Sized> Queue for &Q {
    fn enqueue(&self, item: Item) -> QueueResult<()> {
        (**self).enqueue(item)
    }

    fn dequeue(&self) -> QueueResult<Item> {
        (**self).dequeue()
    }
}

impl<Q: Queue + ?Sized> Queue for Box<Q> {
    fn enqueue(&self, item: Item) -> QueueResult<()> {
        (**self).enqueue(item)
    }

    fn dequeue(&self) -> QueueResult<Item> {
        (**self).dequeue()
    }
}

impl<Q: Queue + ?Sized> Queue for Arc<Q> {
    fn enqueue(&self, item: Item) -> QueueResult<()> {
        (**self).enqueue(item)
    }

    fn dequeue(&self) -> QueueResult<Item> {
        (**self).dequeue()
    }
}
