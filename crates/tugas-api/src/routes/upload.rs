use axum::extract::State;
use axum::Json;
use serde::Serialize;
use serde_json::Value;
use tracing::info;

use tugas_core::validate_payload;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub message: String,
    pub id: String,
    pub status: String,
}

/// Validate, then insert exactly once.
///
/// A payload that fails validation never reaches the store. Success is 200
/// (not 201, a long-standing quirk clients rely on) with the store-assigned
/// id and the caller's own status echoed back.
pub async fn upload(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> ApiResult<Json<UploadResponse>> {
    let record = validate_payload(&payload).map_err(ApiError::Validation)?;
    let id = state.store.insert_record(&record).await?;
    info!(%id, assignee = %record.assignee, "request record stored");

    Ok(Json(UploadResponse {
        message: "Data berhasil diupload".to_string(),
        id,
        status: record.status,
    }))
}
