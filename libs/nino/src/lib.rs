//! # nino-checker
//!
//! Format validation for UK National Insurance numbers (NINOs) and temporary
//! reference numbers (TRNs).
//!
//! ## Scope
//!
//! - Structure only: a well-formed NINO may still never have been issued
//! - Pure functions over `&str`; no I/O, no shared mutable state
//! - Every input gets an answer; nothing panics on bad input
//!
//! ## Formats
//!
//! - NINO: `AB123456C`, two prefix letters, six digits, suffix `A` to `D`
//! - TRN: `11 A1 11 11`, four space-separated groups
//!
//! A rejected NINO reports one [`NinoError`]: `Incorrect format`,
//! `Invalid prefix`, `Administrative prefix` or `Invalid suffix`.
//!
//! ```
//! use nino_checker::{is_trn, validate_nino};
//!
//! let result = validate_nino("OO123456A");
//! assert!(!result.is_valid());
//! assert_eq!(result.message(), Some("Administrative prefix"));
//!
//! assert!(is_trn("11 a1 11 11"));
//! ```

mod error;
mod nino;
mod result;
pub mod rules;
mod trn;

pub use error::{NinoError, TrnError};
pub use nino::{check_nino, validate_nino, Nino, NINO_LENGTH};
pub use result::ValidationResult;
pub use trn::{is_trn, Trn};
