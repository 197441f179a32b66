//! The validation-function catalog.
//!
//! A fixed set of named pure functions over strings, grouped by concern:
//!
//! - [`transforms`] - character filtering and trimming (return a new `String`)
//! - [`predicates`] - character-class and numeric-shape checks
//! - [`formats`] - structured formats: email, phone, URL, date, coordinates
//! - [`locale`] - country-specific zip codes and US state codes
//! - [`compare`] - equality and containment with optional case folding
//!
//! Every function is total over `&str`: no panics, no errors, a `false` or
//! identity-safe default for non-matching input. The dispatch registry in
//! [`crate::dispatch`] refers to these functions by their wire names
//! (`onlyNumbers`, `isZipCode`, ...).

pub mod compare;
pub mod formats;
pub mod locale;
pub mod predicates;
pub mod transforms;

pub use compare::{contains, is_equal};
pub use formats::{is_date, is_email_address, is_lat_long, is_phone_number, is_url};
pub use locale::{CountryCode, is_valid_state_code, is_zip_code};
pub use predicates::{
    is_all_caps, is_alpha_numeric, is_binary_string, is_boolean, is_decimal, is_hexadecimal,
    is_integer, is_lowercase,
};
pub use transforms::{
    exclude_these_characters, include_only_these_characters, only_letters, only_numbers,
    only_special_characters, trim,
};
