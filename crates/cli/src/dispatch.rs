//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to appropriate command handlers.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Printing results or choosing exit codes (see `main()`).

use anyhow::Result;

use crate::args::{Cli, Commands};
use crate::commands;
use crate::output::OutputFormat;

/// Dispatch CLI commands to their respective handlers, returning the rendered output.
pub(crate) fn run_command(cli: Cli) -> Result<String> {
    let format = OutputFormat::from_str(&cli.output)?;
    let loader = cli.loader();
    tracing::debug!(command = ?cli.command, format = ?format, "Dispatching command");

    match cli.command {
        Commands::Paths => commands::paths::run(&loader, format),
        Commands::Env {
            show_values,
            file_only,
        } => commands::env::run(&loader, show_values, file_only, format),
        Commands::Cert => commands::cert::run(&loader, format),
        Commands::Config => commands::config::run(&loader, format),
        Commands::Check => commands::check::run(loader, format),
    }
}
