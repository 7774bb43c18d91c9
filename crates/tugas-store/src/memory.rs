//! In-memory Record Store, for tests and local development.

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use parking_lot::RwLock;

use tugas_core::RequestRecord;

use crate::{RecordStore, StoreError};

/// Keeps records in insertion order and hands out identifiers shaped like
/// the MongoDB backend's: 24 hex characters.
#[derive(Default)]
pub struct MemoryStore {
    records: RwLock<Vec<RequestRecord>>,
    next_id: AtomicU64,
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn insert_record(&self, record: &RequestRecord) -> Result<String, StoreError> {
        let n = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.records.write().push(record.clone());
        Ok(format!("{n:024x}"))
    }

    async fn list_records(&self) -> Result<Vec<RequestRecord>, StoreError> {
        Ok(self.records.read().clone())
    }
}
