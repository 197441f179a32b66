//! Bulk-operation and catalog-listing endpoints.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use verity::dispatch::operation_names;
use verity::{BatchResult, ValueRecord};

use crate::server::error::ApiError;
use crate::server::state::AppState;

/// Request body for POST /api/bulk.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkRequest {
    pub operation_set: Vec<ValueRecord>,
}

/// POST /api/bulk - apply many operations to many values in one call.
///
/// Individual failures (unknown operation names, bad arguments, probe
/// failures) come back as structured outcomes inside the batch; the
/// endpoint itself only rejects malformed requests.
pub async fn bulk(
    State(state): State<AppState>,
    Json(body): Json<BulkRequest>,
) -> Result<Json<BatchResult>, ApiError> {
    let engine = state.engine.clone();
    // Records may contain external operations, so the whole evaluation runs
    // off the async runtime.
    let batch = tokio::task::spawn_blocking(move || engine.evaluate(&body.operation_set))
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    Ok(Json(batch))
}

/// Response for GET /api/operations.
#[derive(Debug, Serialize)]
pub struct OperationsResponse {
    pub operations: Vec<&'static str>,
}

/// GET /api/operations - list every registered operation name.
pub async fn list_operations() -> Json<OperationsResponse> {
    Json(OperationsResponse {
        operations: operation_names(),
    })
}
