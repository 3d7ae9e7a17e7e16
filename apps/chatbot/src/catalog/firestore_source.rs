use anyhow::{Context, Result};
use async_trait::async_trait;
use firestore::{FirestoreDb, FirestoreDbOptions};
use gcloud_sdk::google::firestore::v1::Document;
use gcloud_sdk::{TokenSourceType, GCP_DEFAULT_SCOPES};
use tokio_stream::StreamExt;
use tracing::{info, warn};

use crate::catalog::{CatalogError, CatalogSource, ProductRecord, PRODUCTS_COLLECTION};
use crate::config::Config;

/// Firestore-backed catalog. The client handle is created once at startup and
/// shared by every request.
#[derive(Clone)]
pub struct FirestoreCatalog {
    db: FirestoreDb,
}

impl FirestoreCatalog {
    /// Connects to Firestore with the configured service-account key.
    pub async fn connect(config: &Config) -> Result<Self> {
        info!(
            "Connecting to Firestore project '{}'...",
            config.firebase_project_id
        );

        let key_json = config.firebase_credentials.json()?;
        let db = FirestoreDb::with_options_token_source(
            FirestoreDbOptions::new(config.firebase_project_id.clone()),
            GCP_DEFAULT_SCOPES.clone(),
            TokenSourceType::Json(key_json),
        )
        .await
        .context("Failed to initialise Firestore client")?;

        info!("Firestore client initialized");
        Ok(Self { db })
    }
}

/// Decodes one stored product. A document that cannot be decoded is logged
/// and skipped so it never hides the rest of the catalog.
fn decode_document(doc: &Document) -> Option<ProductRecord> {
    match FirestoreDb::deserialize_doc_to::<ProductRecord>(doc) {
        Ok(record) => Some(record),
        Err(e) => {
            warn!("Skipping malformed product document {}: {e}", doc.name);
            None
        }
    }
}

#[async_trait]
impl CatalogSource for FirestoreCatalog {
    async fn active_products(&self) -> Result<Vec<ProductRecord>, CatalogError> {
        let mut stream = self
            .db
            .fluent()
            .select()
            .from(PRODUCTS_COLLECTION)
            .filter(|q| q.for_all([q.field("isActive").eq(true)]))
            .stream_query_with_errors()
            .await?;

        let mut records = Vec::new();
        while let Some(doc) = stream.try_next().await? {
            records.extend(decode_document(&doc));
        }
        Ok(records)
    }
}
