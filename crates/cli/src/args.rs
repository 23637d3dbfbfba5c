//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Turn global options into a configured `RangerLoader`.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).

use clap::{Parser, Subcommand};
use ranger_config::RangerLoader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "park-ranger")]
#[command(
    about = "Inspect the env, certificate and config sources a server loads at startup",
    long_about = None
)]
#[command(version)]
#[command(
    after_help = "Examples:\n  park-ranger check\n  park-ranger --env-name test paths\n  park-ranger -e production env --show-values\n  park-ranger --root /srv/app -o json cert\n"
)]
pub struct Cli {
    /// Environment name used as the filename suffix (e.g. `test` for `.env-test`)
    #[arg(short, long, global = true, env = "ENV_NAME")]
    pub env_name: Option<String>,

    /// Directory the conventional paths are resolved against (defaults to the working directory)
    #[arg(short, long, global = true, env = "RANGER_ROOT", value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Do not write env-file variables into the process environment
    #[arg(long, global = true)]
    pub local_only: bool,

    /// Output format (text, json)
    #[arg(short, long, global = true, default_value = "text")]
    pub output: String,

    /// Emit debug diagnostics on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the resolved env, certificate and config paths and whether each exists
    Paths,

    /// Show the merged environment snapshot
    Env {
        /// Print variable values instead of redacting them
        #[arg(long)]
        show_values: bool,

        /// Only list variables defined by the env file
        #[arg(long)]
        file_only: bool,
    },

    /// Show which certificate roles were found (never prints key material)
    Cert,

    /// Print the parsed config document
    Config,

    /// Load every source and print a summary
    Check,
}

impl Cli {
    /// Build the loader described by the global options.
    pub fn loader(&self) -> RangerLoader {
        let mut loader = RangerLoader::new()
            .with_env_name_opt(self.env_name.clone())
            .local_only(self.local_only);
        // Blank/whitespace-only values are ignored to allow fallback to the working directory
        if let Some(root) = &self.root
            && !root.as_os_str().to_string_lossy().trim().is_empty()
        {
            loader = loader.with_root(root.clone());
        }
        loader
    }
}
