//! Error types for identifier validation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reasons a National Insurance number is rejected.
///
/// The set is closed: a rejected input carries exactly one of these, chosen by
/// the first check that fails. The `Display` text is the label callers see.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NinoError {
    /// The input is not two letters, six digits and a letter.
    #[error("Incorrect format")]
    #[serde(rename = "Incorrect format")]
    IncorrectFormat,

    /// The prefix uses a disallowed letter or is a disallowed pair.
    #[error("Invalid prefix")]
    #[serde(rename = "Invalid prefix")]
    InvalidPrefix,

    /// The prefix is reserved for administrative use.
    #[error("Administrative prefix")]
    #[serde(rename = "Administrative prefix")]
    AdministrativePrefix,

    /// The final letter is not one of A, B, C or D.
    #[error("Invalid suffix")]
    #[serde(rename = "Invalid suffix")]
    InvalidSuffix,
}

impl NinoError {
    /// Returns the label for this error.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            NinoError::IncorrectFormat => "Incorrect format",
            NinoError::InvalidPrefix => "Invalid prefix",
            NinoError::AdministrativePrefix => "Administrative prefix",
            NinoError::InvalidSuffix => "Invalid suffix",
        }
    }

    /// Returns true if this error concerns the two-letter prefix.
    ///
    /// Administrative prefixes count: they are well formed but never issued to
    /// a person.
    #[must_use]
    pub fn is_prefix_error(&self) -> bool {
        matches!(
            self,
            NinoError::InvalidPrefix | NinoError::AdministrativePrefix
        )
    }
}

/// Errors that can occur when parsing a temporary reference number.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TrnError {
    /// The input does not follow the `DD LD DD DD` layout.
    ///
    /// Only the length is kept; the input itself may be personal data.
    #[error("invalid TRN format ({len} bytes)")]
    InvalidFormat { len: usize },
}
