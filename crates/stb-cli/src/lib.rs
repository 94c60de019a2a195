//! # stb-cli — CLI Tool for Swedish Technical Bureaucracy
//!
//! Provides the `stb` command-line interface over the library crates.
//!
//! ## Subcommands
//!
//! - `stb id` — Classify and describe national identifiers.
//! - `stb ocr` — Create or check OCR payment references.
//! - `stb account` — Validate bank account numbers.
//!
//! Every subcommand accepts `--format text|json` and `--at YYYY-MM-DD`.
//! Exit code 0 means every input was valid, 1 means at least one was not.
//!
//! ```bash
//! stb id 670919-9530 556016-0680
//! stb --format json ocr create 123456789
//! stb account --bank handelsbanken 6789,123456789
//! ```

pub mod account;
pub mod id;
pub mod ocr;
pub mod output;

use chrono::NaiveDate;

use output::OutputFormat;

/// Settings shared by every subcommand.
#[derive(Debug, Clone, Copy)]
pub struct RunContext {
    /// How reports are printed.
    pub format: OutputFormat,
    /// Reference date for century resolution.
    pub reference: NaiveDate,
}

/// Exit code for a batch: 0 if every input was valid.
pub fn exit_code(all_valid: bool) -> u8 {
    if all_valid {
        0
    } else {
        1
    }
}
