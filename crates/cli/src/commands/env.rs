//! Env command implementation.
//!
//! Values are redacted unless explicitly requested; env files commonly hold
//! credentials.

use anyhow::{Context, Result};
use ranger_config::{EnvSnapshot, RangerLoader, load_env};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::commands::{display_source, yes_no};
use crate::output::{OutputFormat, Report, aligned_rows, render};

const REDACTED: &str = "<redacted>";

#[derive(Debug, Serialize)]
pub struct EnvReport {
    pub source: Option<PathBuf>,
    pub committed: bool,
    pub count: usize,
    pub vars: BTreeMap<String, String>,
}

impl EnvReport {
    pub fn from_snapshot(snapshot: &EnvSnapshot, show_values: bool, file_only: bool) -> Self {
        let vars: BTreeMap<String, String> = snapshot
            .iter()
            .filter(|(key, _)| !file_only || snapshot.file_keys().contains(*key))
            .map(|(key, value)| {
                let shown = if show_values { value } else { REDACTED };
                (key.to_string(), shown.to_string())
            })
            .collect();

        Self {
            source: snapshot.source().map(|p| p.to_path_buf()),
            committed: snapshot.committed(),
            count: vars.len(),
            vars,
        }
    }
}

impl Report for EnvReport {
    fn text(&self) -> String {
        let mut out = aligned_rows([
            ("source", display_source(self.source.as_deref())),
            ("committed", yes_no(self.committed)),
            ("count", self.count.to_string()),
        ]);
        for (key, value) in &self.vars {
            out.push_str(&format!("{}={}\n", key, value));
        }
        out
    }
}

pub fn run(
    loader: &RangerLoader,
    show_values: bool,
    file_only: bool,
    format: OutputFormat,
) -> Result<String> {
    let resolver = loader.resolver()?;
    let snapshot =
        load_env(&resolver, loader.is_local_only()).context("Failed to load environment")?;

    render(
        &EnvReport::from_snapshot(&snapshot, show_values, file_only),
        format,
    )
}
