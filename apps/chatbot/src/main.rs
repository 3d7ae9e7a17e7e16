mod catalog;
mod chat;
mod config;
mod errors;
mod llm_client;
mod routes;
mod state;
#[cfg(test)]
mod test_support;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::firestore_source::FirestoreCatalog;
use crate::config::Config;
use crate::llm_client::GroqClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Era Banyu chatbot v{}", env!("CARGO_PKG_VERSION"));

    // Initialize Firestore
    let catalog = FirestoreCatalog::connect(&config).await?;

    // Initialize LLM client
    let llm = GroqClient::new(
        &config.groq_api_base,
        config.groq_api_key.clone(),
        config.llm_timeout_secs.map(Duration::from_secs),
    )?;
    info!("LLM client initialized (model: {})", llm_client::MODEL);
    info!("Product links use base URL {}", config.product_base_url);

    let state = AppState {
        catalog: Arc::new(catalog),
        llm: Arc::new(llm),
        product_base_url: config.product_base_url.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
