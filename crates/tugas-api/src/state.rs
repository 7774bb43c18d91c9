use std::sync::Arc;

use tugas_store::RecordStore;

use crate::config::AppConfig;

/// Shared per-process state: config plus the injected store client.
///
/// The store is a trait object so the Mongo backend can be swapped for the
/// in-memory one in tests without touching the router.
#[derive(Clone)]
pub struct AppState {
    pub cfg: Arc<AppConfig>,
    pub store: Arc<dyn RecordStore>,
}

impl AppState {
    pub fn new(cfg: AppConfig, store: Arc<dyn RecordStore>) -> Self {
        Self { cfg: Arc::new(cfg), store }
    }
}
