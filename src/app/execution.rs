//! Drives a data holder bound to a memory queue

use std::io::Write;
use anyhow::{Context, Result};
use log::{debug, info};
use serde::Serialize;
use crate::cli::OutputFormat;
use crate::config::QueueConfig;
use crate::holder::DataHolder;
use crate::queue::{Item, MemoryQueue};

/// Values that went into the holder and came back out
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HolderReport {
    pub added: Vec<Item>,
    pub retrieved: Vec<Item>,
}

/// Add every value, then make `take` retrievals
pub fn run_holder(values: &[Item], take: usize, queue_config: &QueueConfig) -> Result<HolderReport> {
    let queue = MemoryQueue::new(queue_config.capacity);
    let holder = DataHolder::new(&queue);
    let mut report = HolderReport::default();

    info!("Adding {} value(s) to a queue of capacity {}", values.len(), queue.capacity());
    for &value in values {
        holder.add_data(value)
            .with_context(|| format!("Failed to add value {}", value))?;
        report.added.push(value);
    }

    debug!("Retrieving {} value(s)", take);
    for attempt in 1..=take {
        let value = holder.get_data()
            .with_context(|| format!("Failed to get value {} of {}", attempt, take))?;
        report.retrieved.push(value);
    }

    info!("Retrieved {} value(s), {} left in queue", report.retrieved.len(), queue.size());
    Ok(report)
}

/// Print the retrieved values as text lines, or the whole report as one JSON line
pub fn write_report<W: Write>(out: &mut W, report: &HolderReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for value in &report.retrieved {
                writeln!(out, "{}", value)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, report)
                .context("Failed to serialize report to JSON")?;
            writeln!(out)?;
        }
    }
    out.flush().context("Failed to flush output")
}
