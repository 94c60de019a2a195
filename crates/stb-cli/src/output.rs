//! # Report Output
//!
//! Every subcommand builds serializable report values and hands them to
//! [`emit`], which renders them as human-readable text or as JSON.

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Serialize;
use stb_core::{ErrorKind, StbError};

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One human-readable block per input.
    #[default]
    Text,
    /// A JSON array of reports.
    Json,
}

/// Text rendering of a report.
pub trait TextReport {
    fn render_text(&self) -> String;
}

/// A failed validation, as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorReport {
    pub kind: ErrorKind,
    pub message: String,
}

impl From<&StbError> for ErrorReport {
    fn from(err: &StbError) -> Self {
        Self {
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}

impl std::fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid ({}): {}", self.kind, self.message)
    }
}

/// Render `reports` in `format`.
pub fn render<T: Serialize + TextReport>(format: OutputFormat, reports: &[T]) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(reports
            .iter()
            .map(TextReport::render_text)
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => {
            serde_json::to_string_pretty(reports).context("failed to serialize report")
        }
    }
}

/// Print `reports` to stdout in `format`.
pub fn emit<T: Serialize + TextReport>(format: OutputFormat, reports: &[T]) -> Result<()> {
    println!("{}", render(format, reports)?);
    Ok(())
}

/// Format an aligned `label: value` line.
pub(crate) fn field(label: &str, value: impl std::fmt::Display) -> String {
    format!("  {:<14}{value}\n", format!("{label}:"))
}
