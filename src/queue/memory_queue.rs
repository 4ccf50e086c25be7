//! Bounded In-Memory Queue
//!
//! FIFO queue backed by a lock-free segment queue with a capacity limit.

use std::sync::atomic::{AtomicUsize, Ordering};
use crossbeam_queue::SegQueue;
use log::trace;
use crate::queue::{Item, Queue, QueueError, QueueResult};

/// Capacity used when none is configured
pub const DEFAULT_CAPACITY: usize = 1000;

/// Bounded FIFO queue of items
pub struct MemoryQueue {
    inner: SegQueue<Item>,
    capacity: usize,
    current_size: AtomicUsize,
}

impl MemoryQueue {
    /// Create a new memory queue holding at most `capacity` items
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: SegQueue::new(),
            capacity,
            current_size: AtomicUsize::new(0),
        }
    }

    /// Get current queue size
    pub fn size(&self) -> usize {
        self.current_size.load(Ordering::Acquire)
    }

    /// Check if queue is empty
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Get queue capacity
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for MemoryQueue {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl Queue for MemoryQueue {
    fn enqueue(&self, item: Item) -> QueueResult<()> {
        // Reserve a slot before pushing so concurrent producers cannot overshoot
        let capacity = self.capacity;
        self.current_size
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |size| {
                (size < capacity).then_some(size + 1)
            })
            .map_err(|_| QueueError::queue_full(capacity))?;

        self.inner.push(item);
        trace!("MemoryQueue: enqueued {} (size {})", item, self.size());

        Ok(())
    }

    fn dequeue(&self) -> QueueResult<Item> {
        match self.inner.pop() {
            Some(item) => {
                self.current_size.fetch_sub(1, Ordering::AcqRel);
                trace!("MemoryQueue: dequeued {} (size {})", item, self.size());
                Ok(item)
            }
            None => Err(QueueError::Empty),
        }
    }
}

impl std::fmt::Debug for MemoryQueue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryQueue")
            .field("size", &self.size())
            .field("capacity", &self.capacity)
            .finish()
    }
}
