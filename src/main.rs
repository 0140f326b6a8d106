//! Drivertab CLI entry point.

use std::fs;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use drivertab::cli::Cli;
use drivertab::scan::scan_drivers;
use drivertab::table::DriverTable;
use drivertab::Result;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("drivertab=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("drivertab=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}

/// Scan the devices tree and emit the driver table.
fn run(cli: &Cli) -> Result<()> {
    let map = scan_drivers(&cli.devices_dir)?;
    let table = DriverTable::build(&map);
    let rendered = table.to_markdown();

    match &cli.markdown {
        Some(path) => {
            fs::write(path, &rendered)
                .with_context(|| format!("Failed to write markdown table to {}", path.display()))?;
            tracing::debug!("Wrote driver table to {}", path.display());
        }
        None => print!("{}", rendered),
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("Drivertab starting with args: {:?}", cli);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
