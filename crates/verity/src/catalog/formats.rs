//! Structured-format predicates: email, phone, URL, date, coordinates.

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

static PHONE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?\(?[0-9]{3}\)?[-\s.]?[0-9]{3}[-\s.]?[0-9]{4}$").unwrap());

static URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(https?://)?([a-zA-Z0-9_.-]+)\.([a-zA-Z]{2,6})(/[^\s]*)?$").unwrap()
});

// One entry per accepted date layout. A candidate must match exactly one of
// these; separator style is fixed within each layout, so mixed separators
// never match.
static DATE_LAYOUTS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap(), // YYYY-MM-DD
        Regex::new(r"^\d{2}/\d{2}/\d{4}$").unwrap(), // MM/DD/YYYY or DD/MM/YYYY
        Regex::new(r"^\d{4}/\d{2}/\d{2}$").unwrap(), // YYYY/MM/DD
        Regex::new(r"^\d{2}-\d{2}-\d{4}$").unwrap(), // DD-MM-YYYY or MM-DD-YYYY
        Regex::new(r"^\d{4}\.\d{2}\.\d{2}$").unwrap(), // YYYY.MM.DD
        Regex::new(r"^\d{2}\.\d{2}\.\d{4}$").unwrap(), // DD.MM.YYYY or MM.DD.YYYY
        Regex::new(r"^\d{8}$").unwrap(),             // YYYYMMDD
        Regex::new(r"^\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}$").unwrap(), // YYYY-MM-DD HH:mm:ss
    ]
});

// Runs of two or more separator characters (e.g. "2025--02-23").
static DOUBLED_SEPARATORS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[-/.\s]{2,}").unwrap());

static LAT_LONG_DECIMAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-?\d{1,3}(\.\d+)?,\s*-?\d{1,3}(\.\d+)?$").unwrap());

static LAT_LONG_DMS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^\d{1,3}°\d{1,2}'\d{1,2}(\.\d+)?"[NS]\s+\d{1,3}°\d{1,2}'\d{1,2}(\.\d+)?"[EW]$"#)
        .unwrap()
});

/// `local@domain.tld` shape.
///
/// Rejects a missing or repeated `@`, whitespace, a missing domain segment,
/// and consecutive dots anywhere in the domain part.
pub fn is_email_address(input: &str) -> bool {
    if !EMAIL.is_match(input) {
        return false;
    }
    // The anchor regex guarantees exactly one '@'.
    match input.split_once('@') {
        Some((_, domain)) => !domain.contains(".."),
        None => false,
    }
}

/// North-American 3-3-4 phone number: optional leading `+`, optional
/// parenthesized area code, separators drawn from `-`, `.`, or space.
pub fn is_phone_number(input: &str) -> bool {
    PHONE.is_match(input)
}

/// URL with optional `http://`/`https://` scheme, a domain, a 2-6 letter
/// TLD, and an optional path. Internal whitespace fails the match.
pub fn is_url(input: &str) -> bool {
    URL.is_match(input)
}

/// One of eight separator-consistent date layouts (see `DATE_LAYOUTS`).
///
/// Strings mixing separator styles fail the layout match; runs of repeated
/// separators are rejected outright. No calendar validation is performed:
/// this checks shape, not that the date exists.
pub fn is_date(input: &str) -> bool {
    DATE_LAYOUTS.iter().any(|layout| layout.is_match(input))
        && !DOUBLED_SEPARATORS.is_match(input)
}

/// Latitude/longitude coordinate pair.
///
/// With `check_dms` false: decimal degrees, two signed decimal numbers
/// separated by a comma and optional space. With `check_dms` true: strict
/// degrees-minutes-seconds notation, e.g. `34°3'8"N 118°14'37"W`.
/// Leading/trailing whitespace is ignored either way.
pub fn is_lat_long(input: &str, check_dms: bool) -> bool {
    let trimmed = input.trim();
    if check_dms {
        LAT_LONG_DMS.is_match(trimmed)
    } else {
        LAT_LONG_DECIMAL.is_match(trimmed)
    }
}
