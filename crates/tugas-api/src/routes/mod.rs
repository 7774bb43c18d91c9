use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

mod docs;
mod health;
mod requests;
mod upload;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/healthz", get(health::healthz))
        .route("/api/requests", get(requests::list_requests))
        .route("/api/upload", post(upload::upload))
        .route("/api/swagger.json", get(docs::swagger_json))
        .route("/api/docs", get(docs::docs_page))
}
