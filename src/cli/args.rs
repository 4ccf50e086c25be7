use clap::{Parser, ValueEnum};
use anyhow::Result;
use std::path::PathBuf;
use log::debug;

/// How retrieved values are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One value per line
    Text,
    /// A single JSON object with `added` and `retrieved` arrays
    Json,
}

/// Push values through a data holder and read them back
#[derive(Parser, Debug)]
#[command(name = "dataholder")]
#[command(about = "Push integers through a data holder bound to an in-memory queue and read them back")]
#[command(version)]
pub struct Args {
    /// Values passed to add_data, in order
    #[arg(value_name = "VALUE", allow_negative_numbers = true)]
    pub values: Vec<i64>,

    /// Number of get_data calls (defaults to the number of values)
    #[arg(short = 't', long = "take", value_name = "N")]
    pub take: Option<usize>,

    /// Queue capacity (overrides the configuration file)
    #[arg(short = 'c', long = "capacity", value_name = "N")]
    pub capacity: Option<usize>,

    /// Output format
    #[arg(short = 'o', long = "output", value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,

    /// Verbose output (debug level logging)
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet output (error level logging only)
    #[arg(short, long)]
    pub quiet: bool,

    /// Debug output (trace level logging)
    #[arg(long)]
    pub debug: bool,

    /// Log format: text or json (defaults to the config file, then text)
    #[arg(long, value_name = "FORMAT")]
    pub log_format: Option<String>,

    /// Log file path for file output
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Write logs only to the log file, not the console
    #[arg(long)]
    pub log_file_only: bool,

    /// Log level for file output (independent of console level)
    #[arg(long, value_name = "LEVEL")]
    pub log_file_level: Option<String>,

    /// Configuration file path
    #[arg(long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Configuration section name
    #[arg(long, value_name = "SECTION")]
    pub config_name: Option<String>,
}

impl Args {
    /// Number of values to retrieve
    pub fn take_count(&self) -> usize {
        self.take.unwrap_or(self.values.len())
    }
}

/// Parse command line arguments
pub fn parse_args() -> Args {
    let args = Args::parse();
    debug!("Parsed CLI arguments: {:?}", args);
    args
}

/// Validate CLI argument combinations
pub fn validate_args(args: &Args) -> Result<()> {
    let log_flags_count = [args.verbose, args.quiet, args.debug]
        .iter()
        .filter(|&&flag| flag)
        .count();

    if log_flags_count > 1 {
        anyhow::bail!(
            "Conflicting log level flags: only one of --verbose, --quiet, or --debug may be specified"
        );
    }

    if let Some(format) = &args.log_format {
        if let Err(e) = format.parse::<crate::logging::LogFormat>() {
            anyhow::bail!(e);
        }
    }

    if let Some(level) = &args.log_file_level {
        crate::logging::parse_log_level(level)?;
    }

    if args.log_file_level.is_some() && args.log_file.is_none() {
        anyhow::bail!("--log-file-level requires --log-file to be specified");
    }

    if args.capacity == Some(0) {
        anyhow::bail!("--capacity must be greater than zero");
    }

    Ok(())
}
