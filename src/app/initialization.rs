//! Application initialization and configuration

use anyhow::Result;
use log::{debug, warn, LevelFilter};
use crate::{cli, config, logging};

pub fn load_configuration(args: &cli::Args) -> Result<config::ConfigManager> {
    let mut manager = match &args.config_file {
        Some(config_file) => {
            debug!("Loading configuration from explicit file: {}", config_file.display());
            config::ConfigManager::load_from_file(config_file.clone())?
        }
        None => config::ConfigManager::load()?,
    };

    if let Some(section_name) = &args.config_name {
        manager.select_section(section_name.clone());
    }

    Ok(manager)
}

/// Build the logging configuration; command line flags win over the config file
pub fn configure_logging(args: &cli::Args, config: &config::ConfigManager) -> Result<logging::LogConfig> {
    let console_level = if args.debug {
        LevelFilter::Trace
    } else if args.verbose {
        LevelFilter::Debug
    } else if args.quiet {
        LevelFilter::Error
    } else {
        match config.get_log_level("base", "console-level") {
            Ok(level) => level.unwrap_or(LevelFilter::Info),
            Err(e) => {
                debug!("Invalid console-level in config, using default: {}", e);
                LevelFilter::Info
            }
        }
    };

    let format = match &args.log_format {
        Some(format_str) => format_str.parse::<logging::LogFormat>()
            .map_err(|e| anyhow::anyhow!(e))?,
        None => config.get_value("base", "log-format")
            .and_then(|format_str| format_str.parse().ok())
            .unwrap_or(logging::LogFormat::Text),
    };

    let log_file_path = args.log_file.clone()
        .or_else(|| config.get_path("base", "log-file"));

    let file_log_level = match &args.log_file_level {
        Some(level_str) => Some(logging::parse_log_level(level_str)?),
        None => config.get_log_level("base", "file-log-level").unwrap_or_else(|e| {
            debug!("Invalid file-log-level in config, ignoring: {}", e);
            None
        }),
    };

    let file_only = args.log_file_only || config.get_bool("base", "log-file-only").unwrap_or_else(|e| {
        debug!("Invalid log-file-only in config, ignoring: {}", e);
        None
    }).unwrap_or(false);

    let (destination, file_level) = match log_file_path {
        Some(file_path) => {
            // Without an explicit file level the file follows the console
            let level = file_log_level.unwrap_or(console_level);
            let destination = if file_only {
                logging::LogDestination::File(file_path)
            } else {
                logging::LogDestination::Both(file_path)
            };
            (destination, Some(level))
        }
        None => {
            // --log-file-level without --log-file is rejected by validate_args,
            // so anything left over here came from the config file
            if file_log_level.is_some() {
                warn!("Ignoring base.file-log-level: no log file configured (set base.log-file or --log-file)");
            }
            if file_only {
                warn!("Ignoring log-file-only: no log file configured, logging to console");
            }
            (logging::LogDestination::Console, None)
        }
    };

    Ok(logging::LogConfig {
        console_level,
        file_level,
        format,
        destination,
    })
}

/// Queue settings from the config file, with `--capacity` taking precedence
pub fn resolve_queue_config(args: &cli::Args, config: &config::ConfigManager) -> Result<config::QueueConfig> {
    let mut queue_config = config.get_queue_config()?;

    if let Some(capacity) = args.capacity {
        queue_config.capacity = capacity;
    }
    queue_config.validate()?;

    debug!("Queue capacity set to: {}", queue_config.capacity);
    Ok(queue_config)
}
