//! # Ocr Subcommand
//!
//! Creates OCR references from a payload, or checks existing references.

use anyhow::Result;
use clap::{Args, Subcommand};
use serde::Serialize;
use stb_banking::Ocr;
use stb_core::StbError;

use crate::output::{emit, field, ErrorReport, TextReport};
use crate::{exit_code, RunContext};

/// Arguments for the `stb ocr` subcommand.
#[derive(Args, Debug)]
pub struct OcrArgs {
    #[command(subcommand)]
    pub command: OcrCommand,
}

/// OCR subcommands.
#[derive(Subcommand, Debug)]
pub enum OcrCommand {
    /// Append length and check digits to a payload (0-23 digits).
    Create {
        #[arg(value_name = "PAYLOAD")]
        payload: String,
    },

    /// Check one or more complete OCR references.
    Check {
        #[arg(value_name = "OCR", required = true)]
        references: Vec<String>,
    },
}

/// Result for one payload or reference.
#[derive(Debug, Clone, Serialize)]
pub struct OcrReport {
    pub input: String,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ocr: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length_digit: Option<char>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_digit: Option<char>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorReport>,
}

impl OcrReport {
    fn from_result(input: &str, result: Result<Ocr, StbError>) -> Self {
        match result {
            Ok(ocr) => Self {
                input: input.to_string(),
                valid: true,
                ocr: Some(ocr.to_string()),
                payload: Some(ocr.payload().to_string()),
                length_digit: Some(ocr.length_digit()),
                check_digit: Some(ocr.check_digit()),
                error: None,
            },
            Err(e) => Self {
                input: input.to_string(),
                valid: false,
                ocr: None,
                payload: None,
                length_digit: None,
                check_digit: None,
                error: Some(ErrorReport::from(&e)),
            },
        }
    }
}

impl TextReport for OcrReport {
    fn render_text(&self) -> String {
        if let Some(error) = &self.error {
            return format!("{}: {error}\n", self.input);
        }
        let mut out = format!("{}: valid\n", self.input);
        if let Some(ocr) = &self.ocr {
            out.push_str(&field("ocr", ocr));
        }
        if let Some(payload) = &self.payload {
            out.push_str(&field("payload", payload));
        }
        if let Some(length) = self.length_digit {
            out.push_str(&field("length digit", length));
        }
        if let Some(check) = self.check_digit {
            out.push_str(&field("check digit", check));
        }
        out
    }
}

/// Create a reference from `payload`.
pub fn create_one(payload: &str) -> OcrReport {
    let result = Ocr::create(payload);
    tracing::debug!(payload, ok = result.is_ok(), "created OCR reference");
    OcrReport::from_result(payload, result)
}

/// Check the reference `raw`.
pub fn check_one(raw: &str) -> OcrReport {
    let result = Ocr::parse(raw);
    tracing::debug!(input = raw, ok = result.is_ok(), "checked OCR reference");
    OcrReport::from_result(raw, result)
}

/// Execute the ocr subcommand.
///
/// Returns exit code: 0 if every input is valid, 1 otherwise.
pub fn run_ocr(args: &OcrArgs, ctx: &RunContext) -> Result<u8> {
    let reports = match &args.command {
        OcrCommand::Create { payload } => vec![create_one(payload)],
        OcrCommand::Check { references } => references.iter().map(|r| check_one(r)).collect(),
    };
    emit(ctx.format, &reports)?;
    Ok(exit_code(reports.iter().all(|r| r.valid)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use stb_core::ErrorKind;

    #[test]
    fn create_report() {
        let report = create_one("123456789");
        assert!(report.valid);
        assert_eq!(report.ocr.as_deref(), Some("12345678911"));
        assert_eq!(report.length_digit, Some('1'));
        assert!(report.render_text().contains("12345678911"));
    }

    #[test]
    fn create_rejects_letters() {
        let report = create_one("12a");
        assert!(!report.valid);
        assert_eq!(report.error.map(|e| e.kind), Some(ErrorKind::Structure));
    }

    #[test]
    fn check_reports_length_digit() {
        let report = check_one("12345678921");
        assert_eq!(report.error.as_ref().map(|e| e.kind), Some(ErrorKind::LengthDigit));
        assert!(report.render_text().starts_with("12345678921: invalid (length_digit)"));
    }

    #[test]
    fn check_valid() {
        let report = check_one("12345678911");
        assert!(report.valid);
        assert_eq!(report.payload.as_deref(), Some("123456789"));
    }
}
