//! One-time-passcode value type.

use core::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Pattern accepted for a one-time passcode: 4 to 6 ASCII digits.
static CODE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"^[0-9]{4,6}$").expect("OTP code pattern is valid")
});

/// Errors that can occur when parsing an [`OtpCode`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum OtpCodeError {
    /// The input does not match the 4-6 digit pattern.
    #[error("OTP must be 4-6 digits")]
    InvalidFormat,
}

/// A validated one-time passcode.
///
/// Every entry path into the OTP pipeline - automatic detection, manual
/// input, and the synthetic test generator - goes through [`OtpCode::parse`],
/// so a stored code is always 4 to 6 ASCII digits.
///
/// ## Examples
///
/// ```
/// use mainmarket_core::OtpCode;
///
/// assert!(OtpCode::parse("1234").is_ok());
/// assert!(OtpCode::parse("123456").is_ok());
///
/// assert!(OtpCode::parse("12").is_err());      // too short
/// assert!(OtpCode::parse("1234567").is_err()); // too long
/// assert!(OtpCode::parse("12a4").is_err());    // not digits
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct OtpCode(String);

impl OtpCode {
    /// Parse an `OtpCode` from a string.
    ///
    /// # Errors
    ///
    /// Returns [`OtpCodeError::InvalidFormat`] unless the input is exactly
    /// 4 to 6 ASCII digits.
    pub fn parse(s: &str) -> Result<Self, OtpCodeError> {
        if CODE_PATTERN.is_match(s) {
            Ok(Self(s.to_owned()))
        } else {
            Err(OtpCodeError::InvalidFormat)
        }
    }

    /// Returns the code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `OtpCode` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for OtpCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for OtpCode {
    type Err = OtpCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for OtpCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_codes() {
        assert!(OtpCode::parse("1234").is_ok());
        assert!(OtpCode::parse("12345").is_ok());
        assert!(OtpCode::parse("123456").is_ok());
        assert!(OtpCode::parse("0000").is_ok());
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        assert!(OtpCode::parse("").is_err());
        assert!(OtpCode::parse("12").is_err());
        assert!(OtpCode::parse("123").is_err());
        assert!(OtpCode::parse("1234567").is_err());
    }

    #[test]
    fn test_parse_rejects_non_digits() {
        assert!(OtpCode::parse("12a4").is_err());
        assert!(OtpCode::parse("12 34").is_err());
        assert!(OtpCode::parse(" 1234").is_err());
        assert!(OtpCode::parse("１２３４").is_err()); // fullwidth digits
    }

    #[test]
    fn test_serde_transparent() {
        let code = OtpCode::parse("4821").unwrap();
        assert_eq!(serde_json::to_string(&code).unwrap(), "\"4821\"");
        let back: OtpCode = serde_json::from_str("\"4821\"").unwrap();
        assert_eq!(back, code);
    }
}
