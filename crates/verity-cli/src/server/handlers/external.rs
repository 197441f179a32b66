//! Endpoints that reach external collaborators: URL probe, country lookup,
//! LLM field validation.
//!
//! The underlying clients are blocking, so every outbound call runs under
//! `spawn_blocking`.

use axum::{extract::State, Json};
use serde::Deserialize;
use serde_json::{json, Value};
use verity::catalog;
use verity::FieldJudgement;

use crate::server::error::ApiError;
use crate::server::state::AppState;

use super::{required, required_named, BasicRequest, ResultResponse};

/// Request body for POST /api/isUrl.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlRequest {
    #[serde(default)]
    pub input_string: Option<String>,
    #[serde(default)]
    pub connect_to_url_test: bool,
}

/// POST /api/isUrl
///
/// Shape validation is always performed; with `connectToUrlTest` the
/// response additionally carries the reachability report (which may be a
/// classified failure object - the endpoint itself still answers 200).
pub async fn is_url(
    State(state): State<AppState>,
    Json(body): Json<UrlRequest>,
) -> Result<Json<Value>, ApiError> {
    let input = required(&body.input_string)?.to_string();
    let result = catalog::is_url(&input);

    if !body.connect_to_url_test {
        return Ok(Json(json!({ "result": result })));
    }

    let engine = state.engine.clone();
    let report = tokio::task::spawn_blocking(move || engine.probe().check(&input))
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    Ok(Json(json!({
        "result": result,
        "connectToUrlResult": report,
    })))
}

/// POST /api/isCountry
///
/// A 404 from the lookup service means "not a country" and is a successful
/// `false`; genuine service failures surface as a 502 with the classified
/// failure in the body.
pub async fn is_country(
    State(state): State<AppState>,
    Json(body): Json<BasicRequest>,
) -> Result<Json<ResultResponse<bool>>, ApiError> {
    let input = required(&body.input_string)?.to_string();

    let engine = state.engine.clone();
    let found = tokio::task::spawn_blocking(move || engine.country().lookup(&input))
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?
        .map_err(ApiError::Upstream)?;

    Ok(Json(ResultResponse { result: found }))
}

/// Request body for POST /api/isField.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldRequest {
    #[serde(default)]
    pub input_string: Option<String>,
    #[serde(default)]
    pub field_to_validate: Option<String>,
}

/// POST /api/isField - LLM-backed generic field validation.
pub async fn is_field(
    State(state): State<AppState>,
    Json(body): Json<FieldRequest>,
) -> Result<Json<FieldJudgement>, ApiError> {
    const MESSAGE: &str = "inputString and fieldToValidate are required.";
    let input = required_named(&body.input_string, MESSAGE)?.to_string();
    let field = required_named(&body.field_to_validate, MESSAGE)?.to_string();

    if !state.has_llm() {
        return Err(ApiError::BadRequest(
            "LLM not configured. Set GEMINI_API_KEY or start with --mock-llm.".to_string(),
        ));
    }

    let engine = state.engine.clone();
    let judgement = tokio::task::spawn_blocking(move || {
        // has_llm checked above; the provider is immutable after startup.
        let provider = engine.llm().expect("LLM provider disappeared");
        provider.validate_field(&field, &input)
    })
    .await
    .map_err(|e| ApiError::Internal(e.to_string()))?
    .map_err(|e| ApiError::Llm(e.to_string()))?;

    Ok(Json(judgement))
}
