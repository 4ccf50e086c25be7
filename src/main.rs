use std::io;
use std::process;
use anyhow::Result;
use log::error;
use dataholder::{app, cli, logging};

fn main() {
    if let Err(e) = run() {
        error!("Application error: {:#}", e);
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = cli::parse_args();

    cli::validate_args(&args)?;

    let config_manager = app::load_configuration(&args)?;

    let log_config = app::configure_logging(&args, &config_manager)?;
    logging::init_logger(log_config)?;

    let queue_config = app::resolve_queue_config(&args, &config_manager)?;
    let report = app::run_holder(&args.values, args.take_count(), &queue_config)?;

    app::write_report(&mut io::stdout().lock(), &report, args.output)
}
