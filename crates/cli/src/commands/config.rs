//! Config command implementation.

use anyhow::{Context, Result};
use ranger_config::{RangerLoader, load_config};
use serde::Serialize;
use serde_json::Value;

use crate::output::{OutputFormat, Report, render};

/// The parsed config document, printed as JSON in both formats.
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct ConfigReport(pub Value);

impl Report for ConfigReport {
    fn text(&self) -> String {
        format!("{:#}", self.0)
    }
}

pub fn run(loader: &RangerLoader, format: OutputFormat) -> Result<String> {
    let resolver = loader.resolver()?;
    let config = load_config(&resolver).context("Failed to load config")?;
    render(&ConfigReport(config), format)
}
