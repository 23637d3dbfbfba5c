//! Check command implementation.
//!
//! Runs the same full load a server performs at startup (env, then cert, then
//! config) and summarizes the outcome without printing any values.

use anyhow::{Context, Result};
use ranger_config::{Ranger, RangerLoader};
use serde::Serialize;
use serde_json::Value;
use std::path::PathBuf;

use crate::commands::{display_source, yes_no};
use crate::output::{OutputFormat, Report, aligned_rows, render};

#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub root: PathBuf,
    pub env_name: Option<String>,
    pub env: EnvSummary,
    pub cert: CertSummary,
    pub config: ConfigSummary,
}

#[derive(Debug, Serialize)]
pub struct EnvSummary {
    pub source: Option<PathBuf>,
    pub file_vars: usize,
    pub total_vars: usize,
    pub committed: bool,
}

#[derive(Debug, Serialize)]
pub struct CertSummary {
    pub dir: PathBuf,
    pub found: Vec<&'static str>,
    pub missing: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct ConfigSummary {
    pub path: PathBuf,
    pub found: bool,
    pub kind: &'static str,
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn join_roles(roles: &[&str]) -> String {
    if roles.is_empty() {
        "(none)".to_string()
    } else {
        roles.join(", ")
    }
}

impl CheckReport {
    pub fn from_ranger(ranger: &Ranger) -> Self {
        let missing = ranger.cert.missing_roles();
        Self {
            root: ranger.root.clone(),
            env_name: ranger.env_name.clone(),
            env: EnvSummary {
                source: ranger.env.source().map(|p| p.to_path_buf()),
                file_vars: ranger.env.file_keys().len(),
                total_vars: ranger.env.len(),
                committed: ranger.env.committed(),
            },
            cert: CertSummary {
                dir: ranger.cert.dir.clone(),
                found: ranger_config::CertRole::ALL
                    .into_iter()
                    .filter(|role| !missing.contains(role))
                    .map(|role| role.as_str())
                    .collect(),
                missing: missing.iter().map(|role| role.as_str()).collect(),
            },
            config: ConfigSummary {
                path: ranger.paths.config.clone(),
                found: ranger.paths.config.is_file(),
                kind: value_kind(&ranger.config),
            },
        }
    }
}

impl Report for CheckReport {
    fn text(&self) -> String {
        aligned_rows([
            ("root", self.root.display().to_string()),
            (
                "env name",
                self.env_name.clone().unwrap_or_else(|| "(none)".to_string()),
            ),
            ("env file", display_source(self.env.source.as_deref())),
            (
                "env vars",
                format!("{} from file, {} total", self.env.file_vars, self.env.total_vars),
            ),
            ("committed", yes_no(self.env.committed)),
            ("cert found", join_roles(&self.cert.found)),
            ("cert missing", join_roles(&self.cert.missing)),
            (
                "config",
                if self.config.found {
                    format!("{} ({})", self.config.path.display(), self.config.kind)
                } else {
                    "(none)".to_string()
                },
            ),
        ])
    }
}

pub fn run(loader: RangerLoader, format: OutputFormat) -> Result<String> {
    let ranger = loader.load().context("Startup load failed")?;
    render(&CheckReport::from_ranger(&ranger), format)
}
