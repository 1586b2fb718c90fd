//! National Insurance number validation.
//!
//! A NINO is two prefix letters, six digits and a suffix letter, e.g.
//! `AB123456C`. Checks run in a fixed order and the first failure decides the
//! reported [`NinoError`]:
//!
//! 1. format: layout, prefix alphabet (no `O` second), ASCII digits
//! 2. administrative prefix (`OO`, `FY`, `NC`, `PP`, `PZ`)
//! 3. banned prefix letter (`D`, `F`, `I`, `Q`, `U`, `V`)
//! 4. disallowed prefix pair (`BG`, `GB`, `KN`, `NK`, `NT`, `TN`, `ZZ`)
//! 5. suffix letter (`A` to `D`)
//!
//! Letters are compared without regard to case. Nothing else is normalized.

use std::fmt;
use std::str::FromStr;

use tracing::trace;

use crate::rules;
use crate::{NinoError, ValidationResult};

/// Number of characters in a NINO.
pub const NINO_LENGTH: usize = 9;

const DIGIT_COUNT: usize = 6;

/// Validates a National Insurance number.
///
/// Never panics; every input yields a result.
///
/// ```
/// use nino_checker::{validate_nino, NinoError};
///
/// assert!(validate_nino("AB123456C").is_valid());
/// assert_eq!(validate_nino("BG123456A").error(), Some(NinoError::InvalidPrefix));
/// ```
#[must_use]
pub fn validate_nino(input: &str) -> ValidationResult {
    check_nino(input).into()
}

/// Runs the same checks as [`validate_nino`], returning the first failure.
pub fn check_nino(input: &str) -> Result<(), NinoError> {
    classify(input).inspect_err(|err| {
        trace!(
            target: "nino_checker",
            reason = err.label(),
            len = input.len(),
            "rejected national insurance number"
        );
    })
}

fn classify(input: &str) -> Result<(), NinoError> {
    let Some(parts) = Parts::split(input.as_bytes()) else {
        return Err(NinoError::IncorrectFormat);
    };
    parts.check()
}

/// The prefix and suffix of an input that passed the format check.
struct Parts {
    prefix: [u8; 2],
    suffix: u8,
}

impl Parts {
    /// Runs the checks that follow the format check, in order.
    fn check(&self) -> Result<(), NinoError> {
        if rules::is_administrative_prefix(self.prefix) {
            return Err(NinoError::AdministrativePrefix);
        }

        // Defensive: split() keeps banned letters out of non-administrative prefixes.
        if self
            .prefix
            .iter()
            .any(|&letter| rules::is_invalid_prefix_letter(letter))
        {
            return Err(NinoError::InvalidPrefix);
        }

        if rules::is_invalid_prefix(self.prefix) {
            return Err(NinoError::InvalidPrefix);
        }

        if !rules::is_valid_suffix(self.suffix) {
            return Err(NinoError::InvalidSuffix);
        }

        Ok(())
    }

    fn split(bytes: &[u8]) -> Option<Self> {
        let [first, second, digits @ .., suffix] = bytes else {
            return None;
        };

        if digits.len() != DIGIT_COUNT || !digits.iter().all(u8::is_ascii_digit) {
            return None;
        }

        if !suffix.is_ascii_alphabetic() {
            return None;
        }

        let prefix = [*first, *second];
        let recognized = rules::is_administrative_prefix(prefix)
            || (rules::is_prefix_letter(*first) && rules::is_second_prefix_letter(*second));
        if !recognized {
            return None;
        }

        Some(Self {
            prefix,
            suffix: *suffix,
        })
    }
}

// =============================================================================
// Nino
// =============================================================================

/// A National Insurance number that passed every check.
///
/// Holds the input exactly as given; `ab123456c` and `AB123456C` are both
/// accepted but compare unequal.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Nino(String);

impl Nino {
    /// Parses and validates a NINO.
    pub fn parse(s: &str) -> Result<Self, NinoError> {
        check_nino(s)?;
        Ok(Self(s.to_owned()))
    }

    /// Returns the NINO as given.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the two prefix letters.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.0[..2]
    }

    /// Returns the six digits.
    #[must_use]
    pub fn digits(&self) -> &str {
        &self.0[2..2 + DIGIT_COUNT]
    }

    /// Returns the suffix letter.
    #[must_use]
    pub fn suffix(&self) -> char {
        // Validation guarantees nine ASCII bytes.
        char::from(self.0.as_bytes()[NINO_LENGTH - 1])
    }
}

impl fmt::Display for Nino {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Nino {
    type Err = NinoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Nino {
    type Error = NinoError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl AsRef<str> for Nino {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl serde::Serialize for Nino {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for Nino {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// Tests
// =============================================================================
