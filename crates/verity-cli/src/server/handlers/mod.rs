//! API request handlers.

mod bulk;
mod compare;
mod external;
mod predicate;
mod transform;

pub use bulk::*;
pub use compare::*;
pub use external::*;
pub use predicate::*;
pub use transform::*;

use serde::{Deserialize, Serialize};

use super::error::ApiError;

/// Request body for endpoints whose only field is the input string.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasicRequest {
    #[serde(default)]
    pub input_string: Option<String>,
}

/// Standard success body: `{"result": ...}`.
#[derive(Debug, Serialize)]
pub struct ResultResponse<T: Serialize> {
    pub result: T,
}

/// A character set supplied either as one string or as an array of strings.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Charset {
    One(String),
    Many(Vec<String>),
}

impl Charset {
    /// All members flattened into the element list the catalog expects.
    pub fn into_elements(self) -> Vec<String> {
        match self {
            Charset::One(s) => vec![s],
            Charset::Many(items) => items,
        }
    }
}

/// Extract a required, non-empty input string or fail with the canonical
/// 400. Empty strings count as missing.
pub(crate) fn required(value: &Option<String>) -> Result<&str, ApiError> {
    match value.as_deref() {
        Some(s) if !s.is_empty() => Ok(s),
        _ => Err(ApiError::missing_input()),
    }
}

/// Same as [`required`], with an endpoint-specific message naming all the
/// required fields.
pub(crate) fn required_named<'a>(
    value: &'a Option<String>,
    message: &str,
) -> Result<&'a str, ApiError> {
    match value.as_deref() {
        Some(s) if !s.is_empty() => Ok(s),
        _ => Err(ApiError::BadRequest(message.to_string())),
    }
}
