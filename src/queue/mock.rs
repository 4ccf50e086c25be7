//! Recording Queue Test Double
//!
//! `MockQueue` records every call it receives, in order, and answers
//! `dequeue` from a script of results set up by the test.

use std::collections::VecDeque;
use parking_lot::Mutex;
use log::trace;
use crate::queue::{Item, Queue, QueueError, QueueResult};

/// A single recorded interaction with the queue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueCall {
    Enqueue(Item),
    Dequeue,
}

#[derive(Debug, Default)]
struct MockState {
    calls: Vec<QueueCall>,
    dequeue_script: VecDeque<QueueResult<Item>>,
    enqueue_failure: Option<QueueError>,
}

/// Queue test double for interaction testing
#[derive(Debug, Default)]
pub struct MockQueue {
    state: Mutex<MockState>,
}

impl MockQueue {
    /// Create a mock with no scripted results
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the next unscripted `dequeue` to return `item`
    pub fn will_once(&self, item: Item) -> &Self {
        self.state.lock().dequeue_script.push_back(Ok(item));
        self
    }

    /// Builder form of [`will_once`](Self::will_once)
    pub fn returning(self, item: Item) -> Self {
        self.will_once(item);
        self
    }

    /// Script the next unscripted `dequeue` to fail with `error`
    pub fn fail_dequeue_with(&self, error: QueueError) -> &Self {
        self.state.lock().dequeue_script.push_back(Err(error));
        self
    }

    /// Make the next `enqueue` fail with `error`
    pub fn fail_enqueue_with(&self, error: QueueError) -> &Self {
        self.state.lock().enqueue_failure = Some(error);
        self
    }

    /// All recorded calls, oldest first
    pub fn calls(&self) -> Vec<QueueCall> {
        self.state.lock().calls.clone()
    }

    /// Items passed to `enqueue`, oldest first
    pub fn enqueued(&self) -> Vec<Item> {
        self.state
            .lock()
            .calls
            .iter()
            .filter_map(|call| match call {
                QueueCall::Enqueue(item) => Some(*item),
                QueueCall::Dequeue => None,
            })
            .collect()
    }

    pub fn call_count(&self) -> usize {
        self.state.lock().calls.len()
    }

    pub fn enqueue_count(&self) -> usize {
        self.enqueued().len()
    }

    pub fn dequeue_count(&self) -> usize {
        self.state
            .lock()
            .calls
            .iter()
            .filter(|call| matches!(call, QueueCall::Dequeue))
            .count()
    }

    /// Scripted dequeue results not yet consumed
    pub fn remaining_returns(&self) -> usize {
        self.state.lock().dequeue_script.len()
    }

    /// Fail if any scripted dequeue result was never consumed
    pub fn verify(&self) -> QueueResult<()> {
        let remaining = self.remaining_returns();
        if remaining > 0 {
            return Err(QueueError::operation_failed(format!(
                "{} scripted dequeue result(s) never consumed",
                remaining
            )));
        }
        Ok(())
    }
}

impl Queue for MockQueue {
    fn enqueue(&self, item: Item) -> QueueResult<()> {
        let mut state = self.state.lock();
        state.calls.push(QueueCall::Enqueue(item));
        trace!("MockQueue: recorded enqueue({})", item);

        match state.enqueue_failure.take() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    fn dequeue(&self) -> QueueResult<Item> {
        let mut state = self.state.lock();
        state.calls.push(QueueCall::Dequeue);
        trace!("MockQueue: recorded dequeue()");

        state
            .dequeue_script
            .pop_front()
            .unwrap_or_else(|| Err(QueueError::unexpected_call("dequeue")))
    }
}
