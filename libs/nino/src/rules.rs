//! Rule tables for National Insurance numbers.
//!
//! These tables are fixed by the issuing authority. Letters are stored in
//! upper case; callers fold input to upper case before looking anything up.

// =============================================================================
// Tables
// =============================================================================

/// Letters that may never appear in either prefix position.
pub const INVALID_PREFIX_LETTERS: [u8; 6] = *b"DFIQUV";

/// Prefix pairs that are never issued.
pub const INVALID_PREFIXES: [&str; 7] = ["BG", "GB", "KN", "NK", "NT", "TN", "ZZ"];

/// Prefix pairs reserved for administrative use.
pub const ADMINISTRATIVE_PREFIXES: [&str; 5] = ["OO", "FY", "NC", "PP", "PZ"];

/// Letters allowed as the final character.
pub const VALID_SUFFIXES: [u8; 4] = *b"ABCD";

/// Letters accepted in the first prefix position by the format check.
///
/// This is the alphabet minus [`INVALID_PREFIX_LETTERS`]. Administrative pairs
/// are accepted as a whole even when they use a letter outside it (`FY`, `OO`).
pub const PREFIX_ALPHABET: [u8; 20] = *b"ABCEGHJKLMNOPRSTWXYZ";

/// Letter barred from the second prefix position on top of
/// [`INVALID_PREFIX_LETTERS`].
pub const INVALID_SECOND_PREFIX_LETTER: u8 = b'O';

// =============================================================================
// Lookups
// =============================================================================

/// Returns true if `letter` is accepted as the first prefix letter by the format check.
pub fn is_prefix_letter(letter: u8) -> bool {
    PREFIX_ALPHABET.contains(&letter.to_ascii_uppercase())
}

/// Returns true if `letter` is accepted as the second prefix letter by the format check.
pub fn is_second_prefix_letter(letter: u8) -> bool {
    is_prefix_letter(letter) && letter.to_ascii_uppercase() != INVALID_SECOND_PREFIX_LETTER
}

/// Returns true if `letter` is banned from the prefix.
pub fn is_invalid_prefix_letter(letter: u8) -> bool {
    INVALID_PREFIX_LETTERS.contains(&letter.to_ascii_uppercase())
}

/// Returns true if the prefix is a pair that is never issued.
pub fn is_invalid_prefix(prefix: [u8; 2]) -> bool {
    contains_pair(&INVALID_PREFIXES, prefix)
}

/// Returns true if the prefix is reserved for administrative use.
pub fn is_administrative_prefix(prefix: [u8; 2]) -> bool {
    contains_pair(&ADMINISTRATIVE_PREFIXES, prefix)
}

/// Returns true if `letter` may end a National Insurance number.
pub fn is_valid_suffix(letter: u8) -> bool {
    VALID_SUFFIXES.contains(&letter.to_ascii_uppercase())
}

fn contains_pair(table: &[&str], prefix: [u8; 2]) -> bool {
    let prefix = prefix.map(|b| b.to_ascii_uppercase());
    table.iter().any(|pair| pair.as_bytes() == prefix.as_slice())
}
