//! Country-specific zip/postal codes and US state codes.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Countries with a supported postal-code pattern.
///
/// Country codes are a closed enum, not an open string: callers resolve the
/// code at the boundary (HTTP handler, dispatch registry) so
/// [`is_zip_code`] can never be asked about an unsupported country.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CountryCode {
    Us,
    Uk,
    Ca,
    Au,
    De,
    Fr,
    Jp,
    Br,
    In,
}

impl CountryCode {
    /// All supported codes, in the order reported by the API.
    pub const ALL: [CountryCode; 9] = [
        CountryCode::Us,
        CountryCode::Uk,
        CountryCode::Ca,
        CountryCode::Au,
        CountryCode::De,
        CountryCode::Fr,
        CountryCode::Jp,
        CountryCode::Br,
        CountryCode::In,
    ];

    /// The two-letter uppercase code.
    pub fn as_str(&self) -> &'static str {
        match self {
            CountryCode::Us => "US",
            CountryCode::Uk => "UK",
            CountryCode::Ca => "CA",
            CountryCode::Au => "AU",
            CountryCode::De => "DE",
            CountryCode::Fr => "FR",
            CountryCode::Jp => "JP",
            CountryCode::Br => "BR",
            CountryCode::In => "IN",
        }
    }

    fn pattern(&self) -> &'static Regex {
        match self {
            CountryCode::Us => &ZIP_US,
            CountryCode::Uk => &ZIP_UK,
            CountryCode::Ca => &ZIP_CA,
            CountryCode::Au => &ZIP_AU,
            CountryCode::De => &ZIP_DE,
            CountryCode::Fr => &ZIP_FR,
            CountryCode::Jp => &ZIP_JP,
            CountryCode::Br => &ZIP_BR,
            CountryCode::In => &ZIP_IN,
        }
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CountryCode {
    type Err = ();

    /// Case-insensitive parse; anything outside the supported set is an error.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "US" => Ok(CountryCode::Us),
            "UK" => Ok(CountryCode::Uk),
            "CA" => Ok(CountryCode::Ca),
            "AU" => Ok(CountryCode::Au),
            "DE" => Ok(CountryCode::De),
            "FR" => Ok(CountryCode::Fr),
            "JP" => Ok(CountryCode::Jp),
            "BR" => Ok(CountryCode::Br),
            "IN" => Ok(CountryCode::In),
            _ => Err(()),
        }
    }
}

static ZIP_US: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{5}(-\d{4})?$").unwrap());
static ZIP_UK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^[A-Z]{1,2}\d[A-Z\d]?\d[A-Z]{2}$").unwrap());
static ZIP_CA: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^[A-Z]\d[A-Z]\d[A-Z]\d$").unwrap());
static ZIP_AU: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{4}$").unwrap());
static ZIP_DE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{5}$").unwrap());
static ZIP_FR: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{5}$").unwrap());
static ZIP_JP: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{3}-\d{4}$").unwrap());
static ZIP_BR: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{5}-\d{3}$").unwrap());
static ZIP_IN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[1-9]\d{5}$").unwrap());

/// The 50 US state abbreviations, case-sensitive.
const STATE_CODES: &[&str] = &[
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "FL", "GA", //
    "HI", "ID", "IL", "IN", "IA", "KS", "KY", "LA", "ME", "MD", //
    "MA", "MI", "MN", "MS", "MO", "MT", "NE", "NV", "NH", "NJ", //
    "NM", "NY", "NC", "ND", "OH", "OK", "OR", "PA", "RI", "SC", //
    "SD", "TN", "TX", "UT", "VT", "VA", "WA", "WV", "WI", "WY",
];

/// Validate a postal code against the pattern for `country`.
///
/// All whitespace is stripped from the input before matching, so
/// `"W1A 1AA"` and `"W1A1AA"` are equivalent.
pub fn is_zip_code(input: &str, country: CountryCode) -> bool {
    let compact: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    country.pattern().is_match(&compact)
}

/// Exact membership in the 50-entry US state abbreviation set.
/// Case-sensitive: `"ca"` is not a state code.
pub fn is_valid_state_code(input: &str) -> bool {
    STATE_CODES.contains(&input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_country_code_parse() {
        assert_eq!("US".parse(), Ok(CountryCode::Us));
        assert_eq!("us".parse(), Ok(CountryCode::Us));
        assert_eq!("jP".parse(), Ok(CountryCode::Jp));
        assert!("XX".parse::<CountryCode>().is_err());
        assert!("".parse::<CountryCode>().is_err());
    }

    #[test]
    fn test_us_zip() {
        assert!(is_zip_code("90210", CountryCode::Us));
        assert!(is_zip_code("12345-6789", CountryCode::Us));
        assert!(!is_zip_code("12345-12", CountryCode::Us));
        assert!(!is_zip_code("1234", CountryCode::Us));
    }

    #[test]
    fn test_uk_and_ca_zip() {
        assert!(is_zip_code("W1A 1AA", CountryCode::Uk));
        assert!(is_zip_code("ec1a1bb", CountryCode::Uk));
        assert!(!is_zip_code("W1A 1A", CountryCode::Uk));
        assert!(is_zip_code("K1A 0B1", CountryCode::Ca));
        assert!(is_zip_code("k1a0b1", CountryCode::Ca));
        assert!(!is_zip_code("K1A 0B", CountryCode::Ca));
    }

    #[test]
    fn test_remaining_zip_patterns() {
        assert!(is_zip_code("2000", CountryCode::Au));
        assert!(is_zip_code("10115", CountryCode::De));
        assert!(is_zip_code("75001", CountryCode::Fr));
        assert!(is_zip_code("123-4567", CountryCode::Jp));
        assert!(!is_zip_code("1234567", CountryCode::Jp));
        assert!(is_zip_code("12345-678", CountryCode::Br));
        assert!(is_zip_code("110001", CountryCode::In));
        assert!(!is_zip_code("010001", CountryCode::In)); // leading zero
    }

    #[test]
    fn test_is_valid_state_code() {
        assert!(is_valid_state_code("CA"));
        assert!(is_valid_state_code("WY"));
        assert!(!is_valid_state_code("ca"));
        assert!(!is_valid_state_code("ZZ"));
        assert!(!is_valid_state_code(""));
        assert_eq!(STATE_CODES.len(), 50);
    }
}
