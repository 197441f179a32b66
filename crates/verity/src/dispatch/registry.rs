//! The static operation registry.
//!
//! Maps operation names to function references at initialization time.
//! Dispatch never constructs code from strings: a name either resolves to a
//! registered entry or the caller gets a structured "unknown operation"
//! error.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::catalog;
use crate::catalog::CountryCode;

use super::descriptor::Outcome;

/// Argument extraction failure for one operation invocation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ArgError {
    #[error("Missing required argument '{0}'")]
    Missing(String),

    #[error("Argument '{name}' must be {expected}")]
    Invalid { name: String, expected: &'static str },

    #[error(
        "Country code '{0}' not supported at this time. Supported countries: \
         US, UK, CA, AU, DE, FR, JP, BR, IN"
    )]
    UnsupportedCountry(String),
}

/// View over a descriptor's argument map with typed accessors.
pub struct OperationArgs<'a> {
    map: &'a Map<String, Value>,
}

impl<'a> OperationArgs<'a> {
    pub fn new(map: &'a Map<String, Value>) -> Self {
        Self { map }
    }

    /// Required string argument.
    pub fn str_arg(&self, name: &str) -> Result<&'a str, ArgError> {
        match self.map.get(name) {
            Some(Value::String(s)) => Ok(s),
            Some(_) => Err(ArgError::Invalid {
                name: name.to_string(),
                expected: "a string",
            }),
            None => Err(ArgError::Missing(name.to_string())),
        }
    }

    /// Optional boolean argument with a default.
    pub fn bool_arg_or(&self, name: &str, default: bool) -> Result<bool, ArgError> {
        match self.map.get(name) {
            Some(Value::Bool(b)) => Ok(*b),
            Some(_) => Err(ArgError::Invalid {
                name: name.to_string(),
                expected: "a boolean",
            }),
            None => Ok(default),
        }
    }

    /// Required character-set argument: either a string or an array of
    /// strings; every character of every element joins the set.
    pub fn charset_arg(&self, name: &str) -> Result<Vec<String>, ArgError> {
        match self.map.get(name) {
            Some(Value::String(s)) => Ok(vec![s.clone()]),
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| match item {
                    Value::String(s) => Ok(s.clone()),
                    _ => Err(ArgError::Invalid {
                        name: name.to_string(),
                        expected: "a string or an array of strings",
                    }),
                })
                .collect(),
            Some(_) => Err(ArgError::Invalid {
                name: name.to_string(),
                expected: "a string or an array of strings",
            }),
            None => Err(ArgError::Missing(name.to_string())),
        }
    }

    /// Required country-code argument, validated against [`CountryCode`]
    /// before any catalog function runs.
    pub fn country_arg(&self, name: &str) -> Result<CountryCode, ArgError> {
        let raw = self.str_arg(name)?;
        raw.parse()
            .map_err(|_| ArgError::UnsupportedCountry(raw.to_string()))
    }
}

/// Invocation shape for pure catalog entries.
pub type PureFn = fn(&str, &OperationArgs) -> Result<Outcome, ArgError>;

/// External capabilities the engine routes around the pure catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExternalOp {
    /// Bounded reachability probe (`isUrlReachable`).
    UrlReachable,
    /// Country-name lookup service (`isCountry`).
    Country,
    /// LLM field validation (`isField`).
    Field,
}

/// A registry entry: a pure function reference or an external capability
/// marker the engine resolves against its injected collaborators.
pub enum Entry {
    Pure(PureFn),
    External(ExternalOp),
}

// Pure handlers. Each extracts its declared arguments and wraps the catalog
// call; the subject value is always the first parameter.

fn only_numbers(value: &str, _: &OperationArgs) -> Result<Outcome, ArgError> {
    Ok(Outcome::Text(catalog::only_numbers(value)))
}

fn only_letters(value: &str, _: &OperationArgs) -> Result<Outcome, ArgError> {
    Ok(Outcome::Text(catalog::only_letters(value)))
}

fn only_special_characters(value: &str, _: &OperationArgs) -> Result<Outcome, ArgError> {
    Ok(Outcome::Text(catalog::only_special_characters(value)))
}

fn exclude_these_characters(value: &str, args: &OperationArgs) -> Result<Outcome, ArgError> {
    let set = args.charset_arg("excludeTheseCharacters")?;
    let exclude = set.concat();
    Ok(Outcome::Text(catalog::exclude_these_characters(
        value, &exclude,
    )))
}

fn include_only_these_characters(value: &str, args: &OperationArgs) -> Result<Outcome, ArgError> {
    let allowed = args.charset_arg("onlyTheseCharacters")?;
    Ok(Outcome::Text(catalog::include_only_these_characters(
        value, &allowed,
    )))
}

fn trim(value: &str, _: &OperationArgs) -> Result<Outcome, ArgError> {
    Ok(Outcome::Text(catalog::trim(value)))
}

fn is_integer(value: &str, _: &OperationArgs) -> Result<Outcome, ArgError> {
    Ok(Outcome::Bool(catalog::is_integer(value)))
}

fn is_decimal(value: &str, _: &OperationArgs) -> Result<Outcome, ArgError> {
    Ok(Outcome::Bool(catalog::is_decimal(value)))
}

fn is_hexadecimal(value: &str, _: &OperationArgs) -> Result<Outcome, ArgError> {
    Ok(Outcome::Bool(catalog::is_hexadecimal(value)))
}

fn is_binary_string(value: &str, _: &OperationArgs) -> Result<Outcome, ArgError> {
    Ok(Outcome::Bool(catalog::is_binary_string(value)))
}

fn is_alpha_numeric(value: &str, _: &OperationArgs) -> Result<Outcome, ArgError> {
    Ok(Outcome::Bool(catalog::is_alpha_numeric(value)))
}

fn is_all_caps(value: &str, _: &OperationArgs) -> Result<Outcome, ArgError> {
    Ok(Outcome::Bool(catalog::is_all_caps(value)))
}

fn is_lowercase(value: &str, _: &OperationArgs) -> Result<Outcome, ArgError> {
    Ok(Outcome::Bool(catalog::is_lowercase(value)))
}

fn is_boolean(value: &str, _: &OperationArgs) -> Result<Outcome, ArgError> {
    Ok(Outcome::Bool(catalog::is_boolean(value)))
}

fn is_email_address(value: &str, _: &OperationArgs) -> Result<Outcome, ArgError> {
    Ok(Outcome::Bool(catalog::is_email_address(value)))
}

fn is_phone_number(value: &str, _: &OperationArgs) -> Result<Outcome, ArgError> {
    Ok(Outcome::Bool(catalog::is_phone_number(value)))
}

fn is_url(value: &str, _: &OperationArgs) -> Result<Outcome, ArgError> {
    Ok(Outcome::Bool(catalog::is_url(value)))
}

fn is_date(value: &str, _: &OperationArgs) -> Result<Outcome, ArgError> {
    Ok(Outcome::Bool(catalog::is_date(value)))
}

fn is_zip_code(value: &str, args: &OperationArgs) -> Result<Outcome, ArgError> {
    let country = args.country_arg("countryCode")?;
    Ok(Outcome::Bool(catalog::is_zip_code(value, country)))
}

fn is_valid_state_code(value: &str, _: &OperationArgs) -> Result<Outcome, ArgError> {
    Ok(Outcome::Bool(catalog::is_valid_state_code(value)))
}

fn is_equal(value: &str, args: &OperationArgs) -> Result<Outcome, ArgError> {
    let comparison = args.str_arg("comparisonString")?;
    let case_sensitive = args.bool_arg_or("caseSensitive", true)?;
    Ok(Outcome::Bool(catalog::is_equal(
        value,
        comparison,
        case_sensitive,
    )))
}

fn contains(value: &str, args: &OperationArgs) -> Result<Outcome, ArgError> {
    let needle = args.str_arg("stringContained")?;
    let case_sensitive = args.bool_arg_or("caseSensitive", true)?;
    Ok(Outcome::Bool(catalog::contains(
        value,
        needle,
        case_sensitive,
    )))
}

fn is_lat_long(value: &str, args: &OperationArgs) -> Result<Outcome, ArgError> {
    let check_dms = args.bool_arg_or("checkDMS", false)?;
    Ok(Outcome::Bool(catalog::is_lat_long(value, check_dms)))
}

/// The name → entry table, built once.
///
/// `onlyTheseCharacters` is registered as an alias of
/// `includeOnlyTheseCharacters` so operation names always match their HTTP
/// route names.
static REGISTRY: Lazy<BTreeMap<&'static str, Entry>> = Lazy::new(|| {
    BTreeMap::from([
        ("onlyNumbers", Entry::Pure(only_numbers as PureFn)),
        ("onlyLetters", Entry::Pure(only_letters as PureFn)),
        (
            "onlySpecialCharacters",
            Entry::Pure(only_special_characters as PureFn),
        ),
        (
            "excludeTheseCharacters",
            Entry::Pure(exclude_these_characters as PureFn),
        ),
        (
            "includeOnlyTheseCharacters",
            Entry::Pure(include_only_these_characters as PureFn),
        ),
        (
            "onlyTheseCharacters",
            Entry::Pure(include_only_these_characters as PureFn),
        ),
        ("trim", Entry::Pure(trim as PureFn)),
        ("isInteger", Entry::Pure(is_integer as PureFn)),
        ("isDecimal", Entry::Pure(is_decimal as PureFn)),
        ("isHexadecimal", Entry::Pure(is_hexadecimal as PureFn)),
        ("isBinaryString", Entry::Pure(is_binary_string as PureFn)),
        ("isAlphaNumeric", Entry::Pure(is_alpha_numeric as PureFn)),
        ("isAllCaps", Entry::Pure(is_all_caps as PureFn)),
        ("isLowercase", Entry::Pure(is_lowercase as PureFn)),
        ("isBoolean", Entry::Pure(is_boolean as PureFn)),
        ("isEmailAddress", Entry::Pure(is_email_address as PureFn)),
        ("isPhoneNumber", Entry::Pure(is_phone_number as PureFn)),
        ("isUrl", Entry::Pure(is_url as PureFn)),
        ("isDate", Entry::Pure(is_date as PureFn)),
        ("isZipCode", Entry::Pure(is_zip_code as PureFn)),
        ("isValidStateCode", Entry::Pure(is_valid_state_code as PureFn)),
        ("isEqual", Entry::Pure(is_equal as PureFn)),
        ("contains", Entry::Pure(contains as PureFn)),
        ("isLatLong", Entry::Pure(is_lat_long as PureFn)),
        ("isUrlReachable", Entry::External(ExternalOp::UrlReachable)),
        ("isCountry", Entry::External(ExternalOp::Country)),
        ("isField", Entry::External(ExternalOp::Field)),
    ])
});

/// Resolve an operation name. `None` means unknown; callers turn that into
/// a structured error, never a crash.
pub fn resolve(name: &str) -> Option<&'static Entry> {
    REGISTRY.get(name)
}

/// All registered operation names, sorted.
pub fn operation_names() -> Vec<&'static str> {
    REGISTRY.keys().copied().collect()
}
