//! Record Store backends.
//!
//! The HTTP surface talks to a [`RecordStore`] trait object, never to a
//! concrete client, so tests and local development can swap the MongoDB
//! backend for the in-memory one.

mod memory;
mod mongo;

use async_trait::async_trait;

use tugas_core::RequestRecord;

pub use memory::MemoryStore;
pub use mongo::{MongoConfig, MongoStore};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The store could not be reached or the call timed out.
    #[error("record store unavailable: {0}")]
    Unavailable(String),

    /// A document could not be encoded to, or decoded from, the store's
    /// native representation.
    #[error("malformed record document: {0}")]
    Malformed(String),
}

/// The two operations this service needs from a document store.
///
/// Identifiers are assigned by the store on insert and rendered as opaque
/// strings; listing returns records in store-native order and never exposes
/// identifiers at all.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Append one record and return the store-assigned identifier.
    async fn insert_record(&self, record: &RequestRecord) -> Result<String, StoreError>;

    /// Return every stored record, in store-native order.
    async fn list_records(&self) -> Result<Vec<RequestRecord>, StoreError>;
}
