//! # stb-banking — Swedish Payment Codes
//!
//! Validation and construction of the numeric codes used when paying in
//! Sweden:
//!
//! - [`Ocr`]: OCR payment references, with a length digit and a modulo-10
//!   check digit.
//! - [`BankAccount`]: clearing number plus account number, validated by
//!   the rules of the owning [`BankType`].
//!
//! Both checksum schemes come from [`stb_core::checksum`]. Like the rest of
//! the workspace, nothing here logs or performs I/O.

pub mod account;
pub mod bank;
pub mod ocr;

// Re-export primary types for ergonomic imports.
pub use account::BankAccount;
pub use bank::{validate, AccountRules, AccountShape, BankType, RuleFamily};
pub use ocr::Ocr;
