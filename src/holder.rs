//! Data Holder
//!
//! Thin wrapper that forwards storage and retrieval to a borrowed queue.
//! The holder owns nothing: the queue's owner decides how long it lives,
//! and the borrow keeps the holder from outliving it.

use log::trace;
use crate::queue::{Item, Queue, QueueResult};

/// Delegates `add_data`/`get_data` to the queue it was bound to
pub struct DataHolder<'q, Q: ?Sized> {
    queue: &'q Q,
}

impl<'q, Q: Queue + ?Sized> DataHolder<'q, Q> {
    /// Bind a holder to `queue`
    pub fn new(queue: &'q Q) -> Self {
        Self { queue }
    }

    /// Forward `item` to the queue's `enqueue`
    pub fn add_data(&self, item: Item) -> QueueResult<()> {
        trace!("DataHolder: add_data({})", item);
        self.queue.enqueue(item)
    }

    /// Forward to the queue's `dequeue` and return its result untouched
    pub fn get_data(&self) -> QueueResult<Item> {
        trace!("DataHolder: get_data()");
        self.queue.dequeue()
    }

    /// The queue this holder was bound to
    pub fn queue(&self) -> &'q Q {
        self.queue
    }
}

impl<'q, Q: ?Sized> Clone for DataHolder<'q, Q> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'q, Q: ?Sized> Copy for DataHolder<'q, Q> {}

impl<'q, Q: std::fmt::Debug + ?Sized> std::fmt::Debug for DataHolder<'q, Q> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataHolder")
            .field("queue", &self.queue)
            .finish()
    }
}
