use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use tugas_core::ValidationError;
use tugas_store::StoreError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The creation payload failed validation; the body names every field.
    #[error("{0}")]
    Validation(ValidationError),

    /// The record store could not be reached or the call timed out.
    /// No partial write: the insert either happened or it did not, and we
    /// never retry.
    #[error("record store unavailable")]
    StoreUnavailable,

    #[error("internal error: {0}")]
    Internal(String),
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<String>>,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::StoreUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "invalid_request",
            ApiError::StoreUnavailable => "store_unavailable",
            ApiError::Internal(_) => "internal",
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        // Causes carry connection details; log them, keep the body generic.
        match err {
            StoreError::Unavailable(cause) => {
                tracing::error!(%cause, "record store call failed");
                ApiError::StoreUnavailable
            }
            StoreError::Malformed(cause) => {
                tracing::error!(%cause, "record document conversion failed");
                ApiError::Internal("malformed record document".to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let fields = match &self {
            ApiError::Validation(v) => {
                Some(v.field_names().iter().map(|f| f.to_string()).collect())
            }
            _ => None,
        };
        let body = ErrorBody {
            error: self.to_string(),
            code: self.code().to_string(),
            fields,
        };
        (status, Json(body)).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
