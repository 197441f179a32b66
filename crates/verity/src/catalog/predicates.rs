//! Character-class and numeric-shape predicates.

use once_cell::sync::Lazy;
use regex::Regex;

static INTEGER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(0|[1-9][0-9]*)$").unwrap());
static DECIMAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[+-]?([0-9]+(\.[0-9]*)?|\.[0-9]+)$").unwrap());
static HEXADECIMAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^0x[0-9a-fA-F]+$").unwrap());
static BINARY: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[01]+$").unwrap());
static ALPHA_NUMERIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z0-9]+$").unwrap());
static ALL_CAPS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z]+$").unwrap());
static LOWERCASE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-z]+$").unwrap());

/// Accepted spellings of a boolean value.
const BOOLEAN_VALUES: &[&str] = &["true", "false", "0", "1", "TRUE", "FALSE", "True", "False"];

/// Non-negative integer with no leading zeros (except the literal `"0"`),
/// no sign, no fraction.
pub fn is_integer(input: &str) -> bool {
    INTEGER.is_match(input)
}

/// Decimal number: optional single leading sign, then `digits[.digits]` or
/// `.digits`. Rejects double signs, letters, and a bare `.`.
///
/// `"34."` is accepted; `"-+34"` and `"."` are not.
pub fn is_decimal(input: &str) -> bool {
    DECIMAL.is_match(input)
}

/// Hexadecimal literal: a literal `0x` prefix (lowercase `x` only) followed
/// by one or more hex digits. `0X` is rejected.
pub fn is_hexadecimal(input: &str) -> bool {
    HEXADECIMAL.is_match(input)
}

/// Non-empty string of only `0` and `1`.
pub fn is_binary_string(input: &str) -> bool {
    BINARY.is_match(input)
}

/// Non-empty, ASCII letters and digits only. Spaces and punctuation fail.
pub fn is_alpha_numeric(input: &str) -> bool {
    ALPHA_NUMERIC.is_match(input)
}

/// Non-empty, ASCII uppercase letters only.
pub fn is_all_caps(input: &str) -> bool {
    ALL_CAPS.is_match(input)
}

/// Non-empty, ASCII lowercase letters only.
pub fn is_lowercase(input: &str) -> bool {
    LOWERCASE.is_match(input)
}

/// Exact membership in the accepted boolean spellings:
/// `true`/`false` in lower, upper, and title case, plus `0` and `1`.
pub fn is_boolean(input: &str) -> bool {
    BOOLEAN_VALUES.contains(&input)
}
