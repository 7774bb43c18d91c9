use axum::extract::State;
use axum::Json;

use tugas_core::RequestRecord;

use crate::error::ApiResult;
use crate::state::AppState;

/// Full-collection scan, store-native order, identifiers omitted.
///
/// No pagination; the dataset is expected to stay small.
pub async fn list_requests(State(state): State<AppState>) -> ApiResult<Json<Vec<RequestRecord>>> {
    let records = state.store.list_records().await?;
    Ok(Json(records))
}
