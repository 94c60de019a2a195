//! # Error Types — Flat Error Enumeration
//!
//! Every constructor and parser in the workspace either returns a fully
//! validated value or fails with exactly one [`StbError`]. There is no
//! exception hierarchy: the variants below are the whole taxonomy.
//!
//! ## Design
//!
//! - Each variant carries the offending raw input, so a caller can report
//!   the failure without keeping its own copy of the input.
//! - Structural errors also name the violated rule.
//! - [`ErrorKind`] is the fieldless discriminant. The identifier builder
//!   branches on it: only [`ErrorKind::Structure`] allows fallthrough to
//!   the next identifier kind.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Top-level error type for validation and construction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StbError {
    /// Shape or grammar mismatch: wrong length, non-digit characters,
    /// bad delimiter, impossible date, malformed grouping.
    #[error("invalid structure for {raw:?}: {rule}")]
    Structure {
        /// The rejected input.
        raw: String,
        /// The rule the input violated.
        rule: String,
    },

    /// Structurally valid, but the check digit does not match.
    #[error("invalid check digit for {raw:?}")]
    CheckDigit {
        /// The rejected input.
        raw: String,
    },

    /// OCR reference whose length digit does not match its length.
    #[error("invalid length digit for {raw:?}")]
    LengthDigit {
        /// The rejected input.
        raw: String,
    },

    /// No enabled identifier kind accepted the input.
    #[error("unable to create an identifier from {raw:?}")]
    UnableToClassify {
        /// The rejected input.
        raw: String,
    },

    /// No known bank type owns the clearing number.
    #[error("unsupported bank type for clearing number {clearing:?}")]
    UnsupportedBankType {
        /// The clearing number that matched no bank type.
        clearing: String,
    },
}

impl StbError {
    /// Build a [`StbError::Structure`] from the raw input and a rule description.
    pub fn structure(raw: impl Into<String>, rule: impl Into<String>) -> Self {
        Self::Structure {
            raw: raw.into(),
            rule: rule.into(),
        }
    }

    /// Build a [`StbError::CheckDigit`] for the raw input.
    pub fn check_digit(raw: impl Into<String>) -> Self {
        Self::CheckDigit { raw: raw.into() }
    }

    /// The fieldless discriminant of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Structure { .. } => ErrorKind::Structure,
            Self::CheckDigit { .. } => ErrorKind::CheckDigit,
            Self::LengthDigit { .. } => ErrorKind::LengthDigit,
            Self::UnableToClassify { .. } => ErrorKind::UnableToClassify,
            Self::UnsupportedBankType { .. } => ErrorKind::UnsupportedBankType,
        }
    }

    /// True for shape/grammar failures, the only kind that permits
    /// falling through to another identifier kind.
    pub fn is_structural(&self) -> bool {
        self.kind() == ErrorKind::Structure
    }
}

/// Discriminant of [`StbError`], without payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// See [`StbError::Structure`].
    Structure,
    /// See [`StbError::CheckDigit`].
    CheckDigit,
    /// See [`StbError::LengthDigit`].
    LengthDigit,
    /// See [`StbError::UnableToClassify`].
    UnableToClassify,
    /// See [`StbError::UnsupportedBankType`].
    UnsupportedBankType,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Structure => "structure",
            Self::CheckDigit => "check_digit",
            Self::LengthDigit => "length_digit",
            Self::UnableToClassify => "unable_to_classify",
            Self::UnsupportedBankType => "unsupported_bank_type",
        };
        f.write_str(s)
    }
}
