//! Chat orchestration: catalog fetch → prompt assembly → completion.
//!
//! Upstream failures are recovered here into canned replies. The outcome keeps
//! which path was taken, and its cause, so the handler can log it once; the
//! user only ever sees text.

use anyhow::{Context, Result};

use crate::catalog::{fetch_active_products, CatalogError, CatalogOutcome, CatalogSource};
use crate::chat::assembler::build_prompt;
use crate::chat::prompts::{COMPLETION_FAILED_REPLY, NO_PRODUCT_DATA_REPLY};
use crate::llm_client::{CompletionProvider, LlmError};

#[derive(Debug)]
pub enum ChatOutcome {
    Answered(String),
    /// The catalog holds no active products.
    CatalogEmpty,
    CatalogFailed(CatalogError),
    CompletionFailed(LlmError),
}

impl ChatOutcome {
    /// The text returned to the user for this outcome.
    pub fn reply(&self) -> &str {
        match self {
            ChatOutcome::Answered(text) => text,
            ChatOutcome::CatalogEmpty | ChatOutcome::CatalogFailed(_) => NO_PRODUCT_DATA_REPLY,
            ChatOutcome::CompletionFailed(_) => COMPLETION_FAILED_REPLY,
        }
    }

    pub fn into_reply(self) -> String {
        match self {
            ChatOutcome::Answered(text) => text,
            other => other.reply().to_string(),
        }
    }
}

/// Answers one customer message. `message` must already be trimmed and
/// non-empty.
///
/// Only a failure to assemble the prompt is returned as an error.
pub async fn get_response(
    catalog: &dyn CatalogSource,
    llm: &dyn CompletionProvider,
    product_base_url: &str,
    message: &str,
) -> Result<ChatOutcome> {
    let products = match fetch_active_products(catalog, product_base_url).await {
        CatalogOutcome::Loaded(products) => products,
        CatalogOutcome::Empty => return Ok(ChatOutcome::CatalogEmpty),
        CatalogOutcome::Failed(e) => return Ok(ChatOutcome::CatalogFailed(e)),
    };

    let prompt = build_prompt(&products, message, product_base_url)
        .context("Failed to serialize product catalog for prompt")?;

    Ok(match llm.complete(&prompt.system, &prompt.user).await {
        Ok(text) => ChatOutcome::Answered(text),
        Err(e) => ChatOutcome::CompletionFailed(e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{bubble_wrap_record, RecordingLlm, StaticCatalog};

    const BASE_URL: &str = "http://localhost:3000/produk";

    #[tokio::test]
    async fn test_answered_with_catalog_and_completion() {
        let catalog = StaticCatalog::with_records(vec![bubble_wrap_record()]);
        let llm = RecordingLlm::replying("Kami punya Bubble Wrap Roll.");

        let outcome = get_response(&catalog, &llm, BASE_URL, "Ada bubble wrap?")
            .await
            .unwrap();

        assert!(matches!(outcome, ChatOutcome::Answered(_)));
        assert_eq!(outcome.reply(), "Kami punya Bubble Wrap Roll.");
    }

    #[tokio::test]
    async fn test_prompt_reaches_provider_as_two_turns() {
        let catalog = StaticCatalog::with_records(vec![bubble_wrap_record()]);
        let llm = RecordingLlm::replying("ok");

        get_response(&catalog, &llm, BASE_URL, "Ada bubble wrap?")
            .await
            .unwrap();

        let calls = llm.calls();
        assert_eq!(calls.len(), 1);
        let (system, user) = &calls[0];
        assert!(system.contains("\"Bubble Wrap Roll\""));
        assert!(system.contains("\"Rp 5000 / meter\""));
        assert_eq!(user, "Ada bubble wrap?");
    }

    #[tokio::test]
    async fn test_empty_catalog_skips_completion() {
        let catalog = StaticCatalog::with_records(vec![]);
        let llm = RecordingLlm::replying("should not be used");

        let outcome = get_response(&catalog, &llm, BASE_URL, "Halo").await.unwrap();

        assert!(matches!(outcome, ChatOutcome::CatalogEmpty));
        assert_eq!(outcome.reply(), NO_PRODUCT_DATA_REPLY);
        assert!(llm.calls().is_empty());
    }

    #[tokio::test]
    async fn test_catalog_failure_looks_like_empty() {
        let catalog = StaticCatalog::failing();
        let llm = RecordingLlm::replying("should not be used");

        let outcome = get_response(&catalog, &llm, BASE_URL, "Halo").await.unwrap();

        assert!(matches!(
            outcome,
            ChatOutcome::CatalogFailed(CatalogError::Query(_))
        ));
        assert_eq!(outcome.into_reply(), NO_PRODUCT_DATA_REPLY);
        assert!(llm.calls().is_empty());
    }

    #[tokio::test]
    async fn test_completion_failure_becomes_apology() {
        let catalog = StaticCatalog::with_records(vec![bubble_wrap_record()]);
        let llm = RecordingLlm::failing();

        let outcome = get_response(&catalog, &llm, BASE_URL, "Halo").await.unwrap();

        assert!(matches!(outcome, ChatOutcome::CompletionFailed(_)));
        assert_eq!(outcome.into_reply(), COMPLETION_FAILED_REPLY);
        assert_eq!(llm.calls().len(), 1);
    }
}
