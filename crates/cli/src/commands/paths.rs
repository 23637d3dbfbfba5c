//! Paths command implementation.

use anyhow::Result;
use ranger_config::RangerLoader;
use serde::Serialize;
use std::path::PathBuf;

use crate::commands::yes_no;
use crate::output::{OutputFormat, Report, aligned_rows, render};

/// A resolved source location and whether it is present on disk.
#[derive(Debug, Serialize)]
pub struct PathEntry {
    pub path: PathBuf,
    pub exists: bool,
}

impl PathEntry {
    fn probe(path: PathBuf) -> Self {
        let exists = path.exists();
        Self { path, exists }
    }

    fn text(&self) -> String {
        format!("{} (exists: {})", self.path.display(), yes_no(self.exists))
    }
}

#[derive(Debug, Serialize)]
pub struct PathsReport {
    pub root: PathBuf,
    pub env_name: Option<String>,
    pub env: PathEntry,
    pub cert: PathEntry,
    pub config: PathEntry,
}

impl Report for PathsReport {
    fn text(&self) -> String {
        aligned_rows([
            ("root", self.root.display().to_string()),
            (
                "env name",
                self.env_name.clone().unwrap_or_else(|| "(none)".to_string()),
            ),
            ("env", self.env.text()),
            ("cert", self.cert.text()),
            ("config", self.config.text()),
        ])
    }
}

pub fn run(loader: &RangerLoader, format: OutputFormat) -> Result<String> {
    let resolver = loader.resolver()?;
    let paths = resolver.paths();

    let report = PathsReport {
        root: resolver.root().to_path_buf(),
        env_name: resolver.env_name().map(str::to_string),
        env: PathEntry::probe(paths.env),
        cert: PathEntry::probe(paths.cert),
        config: PathEntry::probe(paths.config),
    };

    render(&report, format)
}
