//! Temporary reference number (TRN) detection.
//!
//! A TRN is issued when a National Insurance number is not available. Its
//! layout is four groups separated by single spaces: two digits, a letter and
//! a digit, two digits, two digits (`11 A1 11 11`). The letter may be either
//! case. There are no sub-reasons for rejection, only match or no match.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

use crate::TrnError;

/// Anchored TRN layout. ASCII digits only; `\d` would admit other scripts.
static TRN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{2} [A-Za-z][0-9] [0-9]{2} [0-9]{2}$").expect("TRN pattern is valid")
});

/// Returns true if `input` is a temporary reference number.
///
/// ```
/// use nino_checker::is_trn;
///
/// assert!(is_trn("11 a1 11 11"));
/// assert!(!is_trn("AA123456A"));
/// ```
#[must_use]
pub fn is_trn(input: &str) -> bool {
    TRN_RE.is_match(input)
}

/// A well-formed temporary reference number, held as given.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Trn(String);

impl Trn {
    /// Parses a TRN.
    pub fn parse(s: &str) -> Result<Self, TrnError> {
        if !is_trn(s) {
            trace!(target: "nino_checker", len = s.len(), "rejected temporary reference number");
            return Err(TrnError::InvalidFormat { len: s.len() });
        }
        Ok(Self(s.to_owned()))
    }

    /// Returns the TRN as given.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Trn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Trn {
    type Err = TrnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Trn {
    type Error = TrnError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl AsRef<str> for Trn {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl serde::Serialize for Trn {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for Trn {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_trns() {
        assert!(is_trn("11 a1 11 11"));
        assert!(is_trn("11 A1 11 11"));
        assert!(is_trn("00 z9 99 00"));
    }

    #[test]
    fn test_nino_is_not_trn() {
        assert!(!is_trn("AA123456A"));
    }

    #[test]
    fn test_layout_deviations() {
        for input in [
            "",
            "11 a1 11 1",
            "11 a1 11 111",
            "11  a1 11 11",
            "11 a1 11 11 ",
            " 11 a1 11 11",
            "11 a1 11 11\n",
            "11a1 11 11",
            "11 11 11 11",
            "11 aa 11 11",
            "1a a1 11 11",
            "11\ta1 11 11",
            "11 é1 11 11",
            "11 a١ 11 11",
            "xx 11 a1 11 11",
        ] {
            assert!(!is_trn(input), "{input:?}");
        }
    }

    #[test]
    fn test_trn_parse() {
        let trn: Trn = "12 B3 45 67".parse().unwrap();
        assert_eq!(trn.as_str(), "12 B3 45 67");
        assert_eq!(trn.to_string(), "12 B3 45 67");
    }

    #[test]
    fn test_trn_parse_error() {
        let err = Trn::parse("AB123456C").unwrap_err();
        assert_eq!(err, TrnError::InvalidFormat { len: 9 });
        assert!(!err.to_string().contains("AB123456C"));
    }

    #[test]
    fn test_trn_json_roundtrip() {
        let trn = Trn::parse("11 a1 11 11").unwrap();
        let json = serde_json::to_string(&trn).unwrap();
        let parsed: Trn = serde_json::from_str(&json).unwrap();
        assert_eq!(trn, parsed);

        let bad: Result<Trn, _> = serde_json::from_str("\"11 a1 11\"");
        assert!(bad.is_err());
    }
}
