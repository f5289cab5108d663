//! PKGkeeper CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use pkgkeeper::apt::SystemApt;
use pkgkeeper::cli::Cli;
use pkgkeeper::sync::{self, SyncOutcome};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("pkgkeeper=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pkgkeeper=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("PKGkeeper starting with args: {:?}", cli.packages);

    let apt = SystemApt::new();
    match sync::synchronize(&apt, &cli.packages) {
        Ok(SyncOutcome::Unchanged) => {
            tracing::debug!("no changes needed");
            ExitCode::SUCCESS
        }
        Ok(SyncOutcome::Applied(diff)) => {
            tracing::debug!(held = diff.add.len(), unheld = diff.remove.len(), "holds updated");
            ExitCode::SUCCESS
        }
        Err(e) => {
            // Single-line error contract on stdout, exit code 1.
            println!("ERROR: {}", e);
            ExitCode::from(1)
        }
    }
}
