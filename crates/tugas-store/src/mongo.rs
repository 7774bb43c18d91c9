//! MongoDB-backed Record Store.

use std::time::Duration;

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{self, Bson, Document};
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection};
use serde::{Deserialize, Serialize};

use tugas_core::RequestRecord;

use crate::{RecordStore, StoreError};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MongoConfig {
    #[serde(default = "MongoConfig::default_uri")]
    pub uri: String,
    #[serde(default = "MongoConfig::default_database")]
    pub database: String,
    #[serde(default = "MongoConfig::default_collection")]
    pub collection: String,
    /// Upper bound on server selection, in seconds. A dead store fails the
    /// request within this bound instead of hanging it.
    #[serde(default = "MongoConfig::default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for MongoConfig {
    fn default() -> Self {
        Self {
            uri: Self::default_uri(),
            database: Self::default_database(),
            collection: Self::default_collection(),
            timeout_secs: Self::default_timeout_secs(),
        }
    }
}

impl MongoConfig {
    fn default_uri() -> String {
        "mongodb://localhost:27017".to_string()
    }

    fn default_database() -> String {
        "tugas".to_string()
    }

    fn default_collection() -> String {
        "requests".to_string()
    }

    fn default_timeout_secs() -> u64 {
        5
    }
}

pub struct MongoStore {
    collection: Collection<Document>,
}

impl MongoStore {
    /// Connect and bind to the configured collection.
    ///
    /// Connection is lazy in the driver; a dead store surfaces on the first
    /// operation, bounded by `timeout_secs`.
    pub async fn connect(cfg: &MongoConfig) -> Result<Self, StoreError> {
        let mut options = ClientOptions::parse(&cfg.uri)
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        options.server_selection_timeout = Some(Duration::from_secs(cfg.timeout_secs));

        let client =
            Client::with_options(options).map_err(|e| StoreError::Unavailable(e.to_string()))?;
        let collection = client.database(&cfg.database).collection(&cfg.collection);
        Ok(Self { collection })
    }
}

#[async_trait]
impl RecordStore for MongoStore {
    async fn insert_record(&self, record: &RequestRecord) -> Result<String, StoreError> {
        let doc =
            bson::to_document(record).map_err(|e| StoreError::Malformed(e.to_string()))?;
        let inserted = self
            .collection
            .insert_one(doc, None)
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;

        let id = match inserted.inserted_id {
            Bson::ObjectId(oid) => oid.to_hex(),
            other => other.to_string(),
        };
        Ok(id)
    }

    async fn list_records(&self) -> Result<Vec<RequestRecord>, StoreError> {
        let mut cursor = self
            .collection
            .find(None, None)
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;

        let mut records = Vec::new();
        while let Some(doc) = cursor
            .try_next()
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))?
        {
            // `_id` is present in the raw document but has no counterpart in
            // the model, so serde drops it here. That is the projection the
            // listing contract requires.
            let record =
                bson::from_document(doc).map_err(|e| StoreError::Malformed(e.to_string()))?;
            records.push(record);
        }
        Ok(records)
    }
}
