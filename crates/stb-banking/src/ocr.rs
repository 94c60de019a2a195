//! # OCR References
//!
//! Payment reference numbers read by optical character recognition on
//! Swedish giro slips. A reference is the payload followed by two control
//! digits:
//!
//! ```text
//! PPPPPPPPP  L  C
//! payload    |  check digit: modulo 10 over payload + L
//!            length digit: (len(payload) + 2) mod 10
//! ```
//!
//! The full reference is 2-25 digits; the payload is 0-23. The length
//! digit is verified before the check digit.

use serde::{Deserialize, Serialize};
use stb_core::checksum::{digit_char, modulo10};
use stb_core::StbError;

/// Longest payload accepted by [`Ocr::create`].
pub const MAX_PAYLOAD_LEN: usize = 23;

/// Shortest full reference: empty payload plus both control digits.
pub const MIN_OCR_LEN: usize = 2;

/// Longest full reference.
pub const MAX_OCR_LEN: usize = MAX_PAYLOAD_LEN + 2;

/// A validated OCR reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ocr(String);

impl Ocr {
    /// Build a reference by appending the length and check digits to
    /// `payload`.
    ///
    /// # Errors
    ///
    /// Returns [`StbError::Structure`] if `payload` contains anything other
    /// than `0-9` or is longer than 23 digits.
    pub fn create(payload: &str) -> Result<Self, StbError> {
        if payload.len() > MAX_PAYLOAD_LEN || !payload.bytes().all(|b| b.is_ascii_digit()) {
            return Err(StbError::structure(
                payload,
                format!("payload must be numeric and contain at most {MAX_PAYLOAD_LEN} digits"),
            ));
        }
        let mut digits = String::with_capacity(payload.len() + 2);
        digits.push_str(payload);
        digits.push(length_digit_for(payload));
        let check = modulo10::check_digit(&digits)?;
        digits.push(digit_char(check));
        Ok(Self(digits))
    }

    /// Validate an existing reference.
    ///
    /// # Errors
    ///
    /// - [`StbError::Structure`] if `raw` is not 2-25 digits.
    /// - [`StbError::LengthDigit`] if the length digit does not match.
    /// - [`StbError::CheckDigit`] if the check digit does not match.
    pub fn parse(raw: &str) -> Result<Self, StbError> {
        if !(MIN_OCR_LEN..=MAX_OCR_LEN).contains(&raw.len())
            || !raw.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(StbError::structure(
                raw,
                format!("OCR must be numeric and contain between {MIN_OCR_LEN} and {MAX_OCR_LEN} digits"),
            ));
        }

        let payload = &raw[..raw.len() - 2];
        let length = char::from(raw.as_bytes()[raw.len() - 2]);

        if length != length_digit_for(payload) {
            return Err(StbError::LengthDigit {
                raw: raw.to_string(),
            });
        }
        if !modulo10::verify(raw)? {
            return Err(StbError::check_digit(raw));
        }

        Ok(Self(raw.to_string()))
    }

    /// The digits before the two control digits.
    pub fn payload(&self) -> &str {
        &self.0[..self.0.len() - 2]
    }

    pub fn length_digit(&self) -> char {
        char::from(self.0.as_bytes()[self.0.len() - 2])
    }

    pub fn check_digit(&self) -> char {
        char::from(self.0.as_bytes()[self.0.len() - 1])
    }

    /// The full reference.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Length digit for `payload`: its length plus the two control digits,
/// modulo 10.
pub fn length_digit_for(payload: &str) -> char {
    digit_char(((payload.len() + 2) % 10) as u8)
}

impl std::fmt::Display for Ocr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for Ocr {
    type Err = StbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Ocr {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Ocr {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stb_core::ErrorKind;

    // ---- create ----

    #[test]
    fn create_appends_length_and_check_digit() {
        let ocr = Ocr::create("123456789").unwrap();
        assert_eq!(ocr.as_str(), "12345678911");
        assert_eq!(ocr.payload(), "123456789");
        assert_eq!(ocr.length_digit(), '1');
        assert_eq!(ocr.check_digit(), '1');
    }

    #[test]
    fn create_empty_payload() {
        let ocr = Ocr::create("").unwrap();
        assert_eq!(ocr.as_str(), "26");
        assert_eq!(ocr.payload(), "");
    }

    #[test]
    fn create_rejects_bad_payload() {
        for payload in ["12a", "-1", " 1", "123456789012345678901234"] {
            let err = Ocr::create(payload).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Structure, "{payload:?}");
        }
        assert!(Ocr::create("12345678901234567890123").is_ok());
    }

    #[test]
    fn length_digit_wraps() {
        // 8 payload digits + 2 control digits = 10.
        assert_eq!(length_digit_for("12345678"), '0');
        assert_eq!(length_digit_for("123456789"), '1');
        assert_eq!(length_digit_for(""), '2');
    }

    // ---- parse ----

    #[test]
    fn parse_valid() {
        let ocr = Ocr::parse("12345678911").unwrap();
        assert_eq!(ocr.payload(), "123456789");
        assert!(Ocr::parse("26").is_ok());
    }

    #[test]
    fn parse_structure_errors() {
        let too_long = "1".repeat(26);
        for raw in ["", "2", "12345678a11", "1234-567891", too_long.as_str()] {
            let err = Ocr::parse(raw).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Structure, "{raw:?}");
        }
    }

    #[test]
    fn parse_length_digit_checked_first() {
        // Both control digits wrong: the length digit is reported.
        let err = Ocr::parse("12345678922").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::LengthDigit);
    }

    #[test]
    fn parse_check_digit_error() {
        let err = Ocr::parse("12345678912").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CheckDigit);
    }

    // ---- conversions ----

    #[test]
    fn display_and_from_str() {
        let ocr: Ocr = "12345678911".parse().unwrap();
        assert_eq!(ocr.to_string(), "12345678911");
    }

    #[test]
    fn serde_validates() {
        let ocr = Ocr::create("4711").unwrap();
        let json = serde_json::to_string(&ocr).unwrap();
        let back: Ocr = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ocr);
        assert!(serde_json::from_str::<Ocr>("\"12345678912\"").is_err());
    }
}
