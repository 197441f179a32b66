//! Comparison, coordinate, and zip-code endpoints.

use axum::Json;
use serde::Deserialize;
use verity::catalog::{self, CountryCode};

use crate::server::error::ApiError;

use super::{required, required_named, ResultResponse};

fn default_true() -> bool {
    true
}

/// Request body for POST /api/isEqual.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EqualRequest {
    #[serde(default)]
    pub input_string: Option<String>,
    #[serde(default)]
    pub comparison_string: Option<String>,
    #[serde(default = "default_true")]
    pub case_sensitive: bool,
}

/// POST /api/isEqual
pub async fn is_equal(
    Json(body): Json<EqualRequest>,
) -> Result<Json<ResultResponse<bool>>, ApiError> {
    const MESSAGE: &str = "inputString and comparisonString are required.";
    let input = required_named(&body.input_string, MESSAGE)?;
    let comparison = required_named(&body.comparison_string, MESSAGE)?;
    Ok(Json(ResultResponse {
        result: catalog::is_equal(input, comparison, body.case_sensitive),
    }))
}

/// Request body for POST /api/contains.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainsRequest {
    #[serde(default)]
    pub input_string: Option<String>,
    #[serde(default)]
    pub string_contained: Option<String>,
    #[serde(default = "default_true")]
    pub case_sensitive: bool,
}

/// POST /api/contains
pub async fn contains(
    Json(body): Json<ContainsRequest>,
) -> Result<Json<ResultResponse<bool>>, ApiError> {
    const MESSAGE: &str = "inputString and stringContained are required.";
    let input = required_named(&body.input_string, MESSAGE)?;
    let needle = required_named(&body.string_contained, MESSAGE)?;
    Ok(Json(ResultResponse {
        result: catalog::contains(input, needle, body.case_sensitive),
    }))
}

/// Request body for POST /api/isLatLong.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LatLongRequest {
    #[serde(default)]
    pub input_string: Option<String>,
    #[serde(rename = "checkDMS", default)]
    pub check_dms: bool,
}

/// POST /api/isLatLong
pub async fn is_lat_long(
    Json(body): Json<LatLongRequest>,
) -> Result<Json<ResultResponse<bool>>, ApiError> {
    let input = required(&body.input_string)?;
    Ok(Json(ResultResponse {
        result: catalog::is_lat_long(input, body.check_dms),
    }))
}

/// Request body for POST /api/isZipCode.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZipCodeRequest {
    #[serde(default)]
    pub input_string: Option<String>,
    #[serde(default)]
    pub country_code: Option<String>,
}

/// POST /api/isZipCode
///
/// The country code is resolved to [`CountryCode`] here, before the catalog
/// function runs; unsupported codes get a 400 carrying the supported list.
pub async fn is_zip_code(
    Json(body): Json<ZipCodeRequest>,
) -> Result<Json<ResultResponse<bool>>, ApiError> {
    const MESSAGE: &str = "inputString and countryCode are required.";
    let input = required_named(&body.input_string, MESSAGE)?;
    let raw_code = required_named(&body.country_code, MESSAGE)?;
    let country: CountryCode = raw_code
        .parse()
        .map_err(|_| ApiError::UnsupportedCountry)?;
    Ok(Json(ResultResponse {
        result: catalog::is_zip_code(input, country),
    }))
}
