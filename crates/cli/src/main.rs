//! park-ranger - inspect startup configuration sources from the command line.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Initialize logging before any source is loaded.
//! - Print command output and map failures to structured exit codes.
//!
//! Does NOT handle:
//! - Locating or parsing sources (see `crates/config`).
//!
//! Invariants:
//! - Diagnostics go to stderr; stdout carries only command output.

mod args;
mod commands;
mod dispatch;
mod error;
mod output;

use args::Cli;
use clap::Parser;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    let cli = Cli::parse();

    // RUST_LOG wins when set; --verbose only raises the fallback level.
    let default_filter = if cli.verbose {
        "ranger_config=debug"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let code = match run_command(cli) {
        Ok(output) => {
            print!("{}", output);
            ExitCode::Success
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(code.as_i32());
}
