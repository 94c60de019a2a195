//! Legal sex encoded in the serial number.

use serde::{Deserialize, Serialize};

/// Sex hint carried by an identifier.
///
/// Birth-date identifiers encode it in the parity of the ninth digit
/// (the last serial digit): odd is male, even is female. Organizations
/// have no sex and report [`Sex::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    /// Odd ninth digit.
    Male,
    /// Even ninth digit.
    Female,
    /// No sex semantics.
    Other,
}

impl Sex {
    /// Derive the sex from a serial number's last digit.
    pub fn from_serial(serial: &str) -> Self {
        match serial.chars().last().and_then(|c| c.to_digit(10)) {
            Some(d) if d % 2 == 1 => Self::Male,
            Some(_) => Self::Female,
            None => Self::Other,
        }
    }
}

impl std::fmt::Display for Sex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Other => "other",
        };
        f.write_str(s)
    }
}
