//! In-memory catalog and completion fakes shared by the unit tests.

use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::json;

use crate::catalog::{CatalogError, CatalogSource, ProductRecord};
use crate::llm_client::{CompletionProvider, LlmError};

pub fn bubble_wrap_record() -> ProductRecord {
    ProductRecord {
        doc_id: Some("abc123".to_string()),
        name: Some(json!("Bubble Wrap Roll")),
        price: Some(json!(5000)),
        unit: Some(json!("meter")),
        current_stock: Some(json!(1200)),
        material: Some(json!("Plastik LDPE")),
        min_order_quantity: Some(json!(50)),
        description: Some(json!("Bubble wrap untuk elektronik")),
    }
}

pub struct StaticCatalog {
    records: Option<Vec<ProductRecord>>,
}

impl StaticCatalog {
    pub fn with_records(records: Vec<ProductRecord>) -> Self {
        Self {
            records: Some(records),
        }
    }

    pub fn failing() -> Self {
        Self { records: None }
    }
}

#[async_trait]
impl CatalogSource for StaticCatalog {
    async fn active_products(&self) -> Result<Vec<ProductRecord>, CatalogError> {
        self.records
            .clone()
            .ok_or_else(|| CatalogError::Query("permission denied".to_string()))
    }
}

/// A source whose fetch panics, standing in for a bug below the handler.
pub struct PanickingCatalog;

#[async_trait]
impl CatalogSource for PanickingCatalog {
    async fn active_products(&self) -> Result<Vec<ProductRecord>, CatalogError> {
        panic!("catalog source blew up")
    }
}

/// Records every (system, user) pair it is asked to complete.
pub struct RecordingLlm {
    reply: Option<String>,
    calls: Mutex<Vec<(String, String)>>,
}

impl RecordingLlm {
    pub fn replying(reply: &str) -> Self {
        Self {
            reply: Some(reply.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            reply: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionProvider for RecordingLlm {
    async fn complete(&self, system_prompt: &str, user_message: &str) -> Result<String, LlmError> {
        self.calls
            .lock()
            .unwrap()
            .push((system_prompt.to_string(), user_message.to_string()));

        self.reply.clone().ok_or(LlmError::Api {
            status: 500,
            message: "upstream unavailable".to_string(),
        })
    }
}
