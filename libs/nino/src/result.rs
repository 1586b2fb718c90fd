//! The outcome of validating a National Insurance number.

use serde::{Deserialize, Serialize};

use crate::NinoError;

/// Validity flag plus the reason for rejection.
///
/// `error` is set if and only if `is_valid` is false. The fields are private so
/// that invariant cannot be broken from outside; build values with
/// [`ValidationResult::valid`] or [`ValidationResult::invalid`].
///
/// Serializes as `{"isValid": bool, "error": string | null}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawResult")]
pub struct ValidationResult {
    is_valid: bool,
    error: Option<NinoError>,
}

impl ValidationResult {
    /// A passing result.
    #[must_use]
    pub const fn valid() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    /// A failing result with its reason.
    #[must_use]
    pub const fn invalid(error: NinoError) -> Self {
        Self {
            is_valid: false,
            error: Some(error),
        }
    }

    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// Returns the rejection reason, if any.
    #[must_use]
    pub const fn error(&self) -> Option<NinoError> {
        self.error
    }

    /// Returns the rejection label, if any.
    #[must_use]
    pub fn message(&self) -> Option<&'static str> {
        self.error.as_ref().map(NinoError::label)
    }

    /// Converts into a `Result` for use with `?`.
    pub fn into_result(self) -> Result<(), NinoError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl From<Result<(), NinoError>> for ValidationResult {
    fn from(result: Result<(), NinoError>) -> Self {
        match result {
            Ok(()) => Self::valid(),
            Err(err) => Self::invalid(err),
        }
    }
}

impl From<ValidationResult> for Result<(), NinoError> {
    fn from(result: ValidationResult) -> Self {
        result.into_result()
    }
}

/// Wire shape, checked before it becomes a [`ValidationResult`].
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawResult {
    is_valid: bool,
    error: Option<NinoError>,
}

impl TryFrom<RawResult> for ValidationResult {
    type Error = String;

    fn try_from(raw: RawResult) -> Result<Self, Self::Error> {
        match (raw.is_valid, raw.error) {
            (true, None) => Ok(Self::valid()),
            (false, Some(err)) => Ok(Self::invalid(err)),
            (true, Some(err)) => Err(format!("valid result cannot carry error '{err}'")),
            (false, None) => Err("invalid result must carry an error".to_string()),
        }
    }
}
