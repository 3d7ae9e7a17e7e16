use std::sync::Arc;

use crate::catalog::CatalogSource;
use crate::llm_client::CompletionProvider;

/// Shared application state injected into all route handlers via Axum extractors.
/// Client handles are built once in `main` and only read afterwards.
#[derive(Clone)]
pub struct AppState {
    /// Product catalog backend. Default: Firestore.
    pub catalog: Arc<dyn CatalogSource>,
    /// Completion backend. Default: Groq chat completions.
    pub llm: Arc<dyn CompletionProvider>,
    /// Base for per-product links, without a trailing slash.
    pub product_base_url: String,
}
