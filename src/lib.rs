//! A data holder that delegates storage to an injected queue.
//!
//! ```rust
//! use dataholder::holder::DataHolder;
//! use dataholder::queue::{MockQueue, QueueCall};
//!
//! let mock = MockQueue::new().returning(1);
//! let holder = DataHolder::new(&mock);
//!
//! holder.add_data(1).unwrap();
//! assert_eq!(holder.get_data().unwrap(), 1);
//! assert_eq!(mock.calls(), vec![QueueCall::Enqueue(1), QueueCall::Dequeue]);
//! ```

pub mod app;
pub mod cli;
pub mod config;
pub mod holder;
pub mod logging;
pub mod queue;

pub use holder::DataHolder;
pub use queue::{Item, MemoryQueue, MockQueue, Queue, QueueCall, QueueError, QueueResult};
