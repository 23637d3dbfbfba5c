//! Output format selection and rendering.
//!
//! Responsibilities:
//! - Parse the `--output` option.
//! - Render command reports as pretty JSON or aligned text.
//!
//! Does NOT handle:
//! - Deciding what a report contains (see `commands`).

use anyhow::Result;
use serde::Serialize;

use crate::error::UsageError;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    /// Parse from string.
    pub fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" | "plain" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(UsageError(format!(
                "Invalid output format: {}. Valid options: text, json",
                s
            ))
            .into()),
        }
    }
}

/// A command result that can be rendered in either format.
pub trait Report: Serialize {
    /// Text rendering, one entry per line.
    fn text(&self) -> String;
}

/// Render `report` in `format`, always ending with a newline.
pub fn render<R: Report>(report: &R, format: OutputFormat) -> Result<String> {
    let mut out = match format {
        OutputFormat::Json => serde_json::to_string_pretty(report)?,
        OutputFormat::Text => report.text(),
    };
    if !out.ends_with('\n') {
        out.push('\n');
    }
    Ok(out)
}

/// Format `label: value` rows with the values aligned.
pub fn aligned_rows<'a>(rows: impl IntoIterator<Item = (&'a str, String)>) -> String {
    let rows: Vec<(&str, String)> = rows.into_iter().collect();
    let width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    rows.iter()
        .map(|(label, value)| format!("{:<width$}  {}\n", label, value, width = width))
        .collect()
}
