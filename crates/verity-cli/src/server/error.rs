//! API error types and handling.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use verity::catalog::CountryCode;
use verity::ProbeFailure;

/// Shared 400 message for endpoints whose only required field is the input
/// string. One shape, one wording, everywhere.
pub const REQUIRED_PARAMETER: &str = "Input string required as a parameter.";

/// API error type.
#[derive(Debug)]
pub enum ApiError {
    /// Bad request from client (missing/empty required field).
    BadRequest(String),
    /// Country code outside the supported set; carries the supported list.
    UnsupportedCountry,
    /// An external collaborator (lookup service, LLM) failed.
    Upstream(ProbeFailure),
    /// LLM call failed after the request was accepted.
    Llm(String),
    /// Internal server error.
    Internal(String),
}

impl ApiError {
    /// The canonical missing-input-string error.
    pub fn missing_input() -> Self {
        ApiError::BadRequest(REQUIRED_PARAMETER.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, json!({ "error": msg })),
            ApiError::UnsupportedCountry => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": "Country code not supported at this time. If this is a valid \
                              country code, please open an issue with the developers.",
                    "supportedCountries": CountryCode::ALL
                        .iter()
                        .map(|c| c.as_str())
                        .collect::<Vec<_>>(),
                }),
            ),
            ApiError::Upstream(failure) => (StatusCode::BAD_GATEWAY, json!({ "error": failure })),
            ApiError::Llm(msg) => (StatusCode::BAD_GATEWAY, json!({ "error": msg })),
            ApiError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": msg }),
            ),
        };

        (status, Json(body)).into_response()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            ApiError::UnsupportedCountry => write!(f, "Unsupported country code"),
            ApiError::Upstream(failure) => write!(f, "Upstream failure: {}", failure.message),
            ApiError::Llm(msg) => write!(f, "LLM error: {}", msg),
            ApiError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}
