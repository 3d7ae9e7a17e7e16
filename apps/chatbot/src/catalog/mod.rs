//! Active product catalog, flattened into the rows the assistant sees.
//!
//! The storage backend sits behind `CatalogSource` so the chat service can be
//! exercised without a live Firestore project. `AppState` carries it as
//! `Arc<dyn CatalogSource>`.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

pub mod firestore_source;

pub const PRODUCTS_COLLECTION: &str = "products";

const DEFAULT_NAME: &str = "Tanpa Nama";
const DEFAULT_UNIT: &str = "pcs";
const DEFAULT_MATERIAL: &str = "-";
const DEFAULT_STOCK: i64 = 0;
const DEFAULT_MIN_ORDER: i64 = 1;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Firestore query failed: {0}")]
    Query(String),
}

impl From<firestore::errors::FirestoreError> for CatalogError {
    fn from(err: firestore::errors::FirestoreError) -> Self {
        CatalogError::Query(err.to_string())
    }
}

/// A product document as stored, before defaults are applied.
/// Every field is optional and loosely typed; admins may save partial or
/// oddly typed documents and one of them must not hide the rest.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    /// Document key, injected by the Firestore deserializer.
    #[serde(rename = "_firestore_id", default)]
    pub doc_id: Option<String>,
    pub name: Option<Value>,
    pub price: Option<Value>,
    pub unit: Option<Value>,
    pub current_stock: Option<Value>,
    pub material: Option<Value>,
    pub min_order_quantity: Option<Value>,
    pub description: Option<Value>,
}

/// A display-ready product. Field labels are the ones the assistant sees in
/// its system prompt.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Nama Produk")]
    pub name: String,
    #[serde(rename = "Link")]
    pub link: String,
    #[serde(rename = "Harga")]
    pub price: String,
    #[serde(rename = "Stok")]
    pub stock: i64,
    #[serde(rename = "Material")]
    pub material: String,
    #[serde(rename = "Minimal Order")]
    pub min_order: i64,
    #[serde(rename = "Deskripsi")]
    pub description: String,
}

impl Product {
    /// Applies the catalog defaults to a stored record.
    pub fn from_record(record: ProductRecord, product_base_url: &str) -> Self {
        let id = record.doc_id.unwrap_or_default();
        let unit = as_text(record.unit.as_ref()).unwrap_or_else(|| DEFAULT_UNIT.to_string());

        Product {
            link: format!("{product_base_url}/{id}"),
            price: format!("Rp {} / {}", format_price(record.price.as_ref()), unit),
            name: as_text(record.name.as_ref()).unwrap_or_else(|| DEFAULT_NAME.to_string()),
            stock: as_count(record.current_stock.as_ref()).unwrap_or(DEFAULT_STOCK),
            material: as_text(record.material.as_ref())
                .unwrap_or_else(|| DEFAULT_MATERIAL.to_string()),
            min_order: as_count(record.min_order_quantity.as_ref()).unwrap_or(DEFAULT_MIN_ORDER),
            description: as_text(record.description.as_ref()).unwrap_or_default(),
            id,
        }
    }
}

/// Renders any stored value as text. Strings are taken verbatim, everything
/// else uses its JSON form. `null` counts as missing.
fn as_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Renders the price the way it is stored: `5000` stays `5000`, `2500.5`
/// stays `2500.5`. Blank or missing prices show as `0`.
fn format_price(price: Option<&Value>) -> String {
    as_text(price)
        .map(|p| p.trim().to_string())
        .filter(|p| !p.is_empty())
        .unwrap_or_else(|| "0".to_string())
}

/// Reads a whole-unit quantity. Stock and minimum order are counted in
/// units, so a fractional value is truncated toward zero (`12.7` reads as
/// `12`). Non-numeric values count as missing.
fn as_count(value: Option<&Value>) -> Option<i64> {
    match value? {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f.trunc() as i64)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().map(|f| f.trunc() as i64))
        }
        _ => None,
    }
}

/// Read access to the product collection.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Returns every stored product whose `isActive` flag is true.
    async fn active_products(&self) -> Result<Vec<ProductRecord>, CatalogError>;
}

/// Result of one catalog fetch. `Empty` and `Failed` produce the same reply
/// for the user; only the logs tell them apart.
#[derive(Debug)]
pub enum CatalogOutcome {
    Loaded(Vec<Product>),
    Empty,
    Failed(CatalogError),
}

/// Fetches the active catalog fresh from the source. Never fails: a source
/// error comes back as `CatalogOutcome::Failed` for the caller to log.
pub async fn fetch_active_products(
    source: &dyn CatalogSource,
    product_base_url: &str,
) -> CatalogOutcome {
    match source.active_products().await {
        Ok(records) if records.is_empty() => {
            debug!("Catalog fetch returned no active products");
            CatalogOutcome::Empty
        }
        Ok(records) => {
            let products: Vec<Product> = records
                .into_iter()
                .map(|r| Product::from_record(r, product_base_url))
                .collect();
            debug!("Catalog fetch returned {} active products", products.len());
            CatalogOutcome::Loaded(products)
        }
        Err(e) => CatalogOutcome::Failed(e),
    }
}
