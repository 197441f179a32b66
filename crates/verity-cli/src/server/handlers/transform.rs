//! Character-filtering transform endpoints.

use axum::Json;
use serde::Deserialize;
use verity::catalog;

use crate::server::error::ApiError;

use super::{required, required_named, BasicRequest, Charset, ResultResponse};

macro_rules! transform_handler {
    ($name:ident, $route:literal, $func:path) => {
        #[doc = concat!("POST /api/", $route)]
        pub async fn $name(
            Json(body): Json<BasicRequest>,
        ) -> Result<Json<ResultResponse<String>>, ApiError> {
            let input = required(&body.input_string)?;
            Ok(Json(ResultResponse {
                result: $func(input),
            }))
        }
    };
}

transform_handler!(only_numbers, "onlyNumbers", catalog::only_numbers);
transform_handler!(only_letters, "onlyLetters", catalog::only_letters);
transform_handler!(
    only_special_characters,
    "onlySpecialCharacters",
    catalog::only_special_characters
);
transform_handler!(trim, "trim", catalog::trim);

/// Request body for POST /api/excludeTheseCharacters.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExcludeRequest {
    #[serde(default)]
    pub input_string: Option<String>,
    #[serde(default)]
    pub exclude_these_characters: Option<Charset>,
}

/// POST /api/excludeTheseCharacters
pub async fn exclude_these_characters(
    Json(body): Json<ExcludeRequest>,
) -> Result<Json<ResultResponse<String>>, ApiError> {
    const MESSAGE: &str = "inputString and excludeTheseCharacters are required.";
    let input = required_named(&body.input_string, MESSAGE)?;
    let exclude = body
        .exclude_these_characters
        .ok_or_else(|| ApiError::BadRequest(MESSAGE.to_string()))?
        .into_elements()
        .concat();
    Ok(Json(ResultResponse {
        result: catalog::exclude_these_characters(input, &exclude),
    }))
}

/// Request body for POST /api/onlyTheseCharacters.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnlyTheseRequest {
    #[serde(default)]
    pub input_string: Option<String>,
    #[serde(default)]
    pub only_these_characters: Option<Charset>,
}

/// POST /api/onlyTheseCharacters
pub async fn only_these_characters(
    Json(body): Json<OnlyTheseRequest>,
) -> Result<Json<ResultResponse<String>>, ApiError> {
    const MESSAGE: &str = "inputString and onlyTheseCharacters are required.";
    let input = required_named(&body.input_string, MESSAGE)?;
    let allowed = body
        .only_these_characters
        .ok_or_else(|| ApiError::BadRequest(MESSAGE.to_string()))?
        .into_elements();
    Ok(Json(ResultResponse {
        result: catalog::include_only_these_characters(input, &allowed),
    }))
}
