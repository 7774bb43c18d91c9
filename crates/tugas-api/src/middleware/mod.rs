use axum::Router;
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;

mod cors;
mod request_id;

pub fn wrap(router: Router, cfg: &AppConfig) -> Router {
    router
        .layer(request_id::propagate_layer())
        .layer(request_id::set_layer())
        .layer(cors::layer(&cfg.cors))
        .layer(TraceLayer::new_for_http())
}
