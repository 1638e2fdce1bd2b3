//! GSTIN (GST Identification Number) format validation.
//!
//! A GSTIN is 15 ASCII characters:
//!
//! | Position | Content | Allowed |
//! |----------|---------|---------|
//! | 0-1 | State code | `0-9` |
//! | 2-11 | PAN of the holder | `A-Z` x5, `0-9` x4, `A-Z` |
//! | 12 | Entity number within the PAN | `1-9`, `A-Z` |
//! | 13 | Default letter | `Z` |
//! | 14 | Check character | `0-9`, `A-Z` |
//!
//! Validation is purely lexical. The check character is not verified and no
//! registry lookup is made.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Length of a GSTIN in bytes (all positions are ASCII).
pub const GSTIN_LEN: usize = 15;

/// Error returned when a GSTIN fails format validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GstinFormatError {
    /// The invalid input value.
    pub value: String,
    /// Why the value failed validation.
    pub reason: String,
}

impl fmt::Display for GstinFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid GSTIN '{}': {}", self.value, self.reason)
    }
}

impl std::error::Error for GstinFormatError {}

/// Return `true` if `gstin` matches the GSTIN format exactly.
///
/// Case-sensitive, full-string match. Never panics on any input.
pub fn validate_gstin(gstin: &str) -> bool {
    check_gstin(gstin).is_ok()
}

/// Validate a GSTIN by format, reporting the first offending position.
pub fn check_gstin(gstin: &str) -> Result<Gstin, GstinFormatError> {
    let bytes = gstin.as_bytes();
    if bytes.len() != GSTIN_LEN {
        return Err(GstinFormatError {
            value: gstin.into(),
            reason: format!("expected {GSTIN_LEN} ASCII characters, got {} bytes", bytes.len()),
        });
    }

    type ClassCheck = fn(u8) -> bool;
    let classes: [(ClassCheck, &str); GSTIN_LEN] = [
        (is_digit, "state code digit"),
        (is_digit, "state code digit"),
        (is_upper, "uppercase PAN letter"),
        (is_upper, "uppercase PAN letter"),
        (is_upper, "uppercase PAN letter"),
        (is_upper, "uppercase PAN letter"),
        (is_upper, "uppercase PAN letter"),
        (is_digit, "PAN digit"),
        (is_digit, "PAN digit"),
        (is_digit, "PAN digit"),
        (is_digit, "PAN digit"),
        (is_upper, "uppercase PAN check letter"),
        (|b| matches!(b, b'1'..=b'9' | b'A'..=b'Z'), "entity number 1-9 or A-Z"),
        (|b| b == b'Z', "literal 'Z'"),
        (|b| is_digit(b) || is_upper(b), "check character 0-9 or A-Z"),
    ];

    for (pos, (&b, (check, expected))) in bytes.iter().zip(classes.iter()).enumerate() {
        if !check(b) {
            return Err(GstinFormatError {
                value: gstin.into(),
                reason: format!("position {}: expected {expected}", pos + 1),
            });
        }
    }

    Ok(Gstin(gstin.to_string()))
}

fn is_digit(b: u8) -> bool {
    b.is_ascii_digit()
}

fn is_upper(b: u8) -> bool {
    b.is_ascii_uppercase()
}

/// A GSTIN that has passed format validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Gstin(String);

impl Gstin {
    /// The full 15-character identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Two-digit state code prefix (e.g. "27" for Maharashtra).
    pub fn state_code(&self) -> &str {
        &self.0[..2]
    }

    /// The embedded 10-character PAN.
    pub fn pan(&self) -> &str {
        &self.0[2..12]
    }

    /// Registration number of this entity under the same PAN.
    pub fn entity_code(&self) -> char {
        char::from(self.0.as_bytes()[12])
    }

    /// Trailing check character (not verified).
    pub fn check_char(&self) -> char {
        char::from(self.0.as_bytes()[14])
    }
}

impl FromStr for Gstin {
    type Err = GstinFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        check_gstin(s)
    }
}

impl TryFrom<String> for Gstin {
    type Error = GstinFormatError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        check_gstin(&value)
    }
}

impl From<Gstin> for String {
    fn from(gstin: Gstin) -> Self {
        gstin.0
    }
}

impl fmt::Display for Gstin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
