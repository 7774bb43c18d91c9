use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tracing::info;

mod app;
mod config;
mod error;
mod middleware;
mod openapi;
mod routes;
mod state;
mod telemetry;

#[tokio::main]
async fn main() -> Result<()> {
    let args = config::Args::parse();
    let cfg = config::load_config(args.config.as_deref())?;

    telemetry::init(&cfg.telemetry, &cfg.log_level)?;

    let store: Arc<dyn tugas_store::RecordStore> = match cfg.store.backend.as_str() {
        "memory" => Arc::new(tugas_store::MemoryStore::default()),
        _ => Arc::new(tugas_store::MongoStore::connect(&cfg.store.mongo).await?),
    };

    let app_state = state::AppState::new(cfg.clone(), store);
    let router = app::build_router(app_state);

    let addr: SocketAddr = cfg.listen_addr.parse()?;
    info!(%addr, backend = %cfg.store.backend, "starting tugas-api");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}
