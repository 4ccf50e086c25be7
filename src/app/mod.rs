//! Application orchestration module

pub mod initialization;
pub mod execution;

pub use initialization::{load_configuration, configure_logging, resolve_queue_config};
pub use execution::{run_holder, write_report, HolderReport};
