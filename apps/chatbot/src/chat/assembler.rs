//! Builds the system prompt and user turn for one completion from the fixed
//! policy text, the live catalog and the customer's message.

use crate::catalog::Product;
use crate::chat::prompts::{
    ADMIN_WHATSAPP_LINK, ADMIN_WHATSAPP_NUMBER, ADMIN_WORKING_HOURS, COMPANY_INFO,
    SYSTEM_PROMPT_TEMPLATE,
};

/// The prompt for a single completion: the system instruction block and the
/// user turn.
#[derive(Debug, Clone, PartialEq)]
pub struct AssembledPrompt {
    pub system: String,
    pub user: String,
}

/// Serializes the catalog as pretty JSON with the display labels the
/// instructions refer to. Non-ASCII text is kept as-is.
pub fn serialize_catalog(products: &[Product]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(products)
}

/// Builds the prompt. The shape never depends on the input; only the catalog
/// block and the user turn vary.
pub fn build_prompt(
    products: &[Product],
    user_message: &str,
    product_base_url: &str,
) -> Result<AssembledPrompt, serde_json::Error> {
    let product_context = serialize_catalog(products)?;

    // Catalog goes in last so placeholder-like text in product data is never
    // substituted.
    let system = SYSTEM_PROMPT_TEMPLATE
        .replace("{admin_whatsapp_number}", ADMIN_WHATSAPP_NUMBER)
        .replace("{admin_whatsapp_link}", ADMIN_WHATSAPP_LINK)
        .replace("{admin_working_hours}", ADMIN_WORKING_HOURS)
        .replace("{company_info}", COMPANY_INFO)
        .replace("{product_base_url}", product_base_url)
        .replace("{product_context}", &product_context);

    Ok(AssembledPrompt {
        system,
        user: user_message.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ProductRecord;
    use serde_json::json;
    use crate::test_support::bubble_wrap_record;

    const BASE_URL: &str = "https://erabanyu.com/produk";

    fn bubble_wrap() -> Product {
        Product::from_record(bubble_wrap_record(), BASE_URL)
    }

    fn position(haystack: &str, needle: &str) -> usize {
        haystack
            .find(needle)
            .unwrap_or_else(|| panic!("missing section: {needle}"))
    }

    #[test]
    fn test_catalog_block_contains_product_fields() {
        let prompt = build_prompt(&[bubble_wrap()], "Ada bubble wrap?", BASE_URL).unwrap();
        assert!(prompt.system.contains("\"Bubble Wrap Roll\""));
        assert!(prompt.system.contains("\"Rp 5000 / meter\""));
        assert!(prompt.system.contains("\"Minimal Order\": 50"));
        assert!(prompt
            .system
            .contains("\"Link\": \"https://erabanyu.com/produk/abc123\""));
        assert_eq!(prompt.user, "Ada bubble wrap?");
    }

    #[test]
    fn test_sections_appear_in_order() {
        let prompt = build_prompt(&[bubble_wrap()], "Halo", BASE_URL).unwrap();
        let system = &prompt.system;

        let role = position(system, "Kamu adalah Customer Service");
        let rules = position(system, "PERATURAN PENTING");
        let contact = position(system, "INFORMASI KONTAK ADMIN");
        let company = position(system, "INFORMASI PERUSAHAAN");
        let catalog = position(system, "DATA PRODUK REAL-TIME");
        let format = position(system, "FORMAT JAWABAN REKOMENDASI PRODUK");

        assert!(role < rules);
        assert!(rules < contact);
        assert!(contact < company);
        assert!(company < catalog);
        assert!(catalog < format);
    }

    #[test]
    fn test_no_placeholders_left() {
        let prompt = build_prompt(&[bubble_wrap()], "Halo", BASE_URL).unwrap();
        for placeholder in [
            "{admin_whatsapp_number}",
            "{admin_whatsapp_link}",
            "{admin_working_hours}",
            "{company_info}",
            "{product_context}",
            "{product_base_url}",
        ] {
            assert!(!prompt.system.contains(placeholder), "{placeholder} left");
        }
        assert!(prompt
            .system
            .contains("[Bubble Wrap Roll](https://erabanyu.com/produk/abc123)"));
    }

    #[test]
    fn test_product_text_is_not_substituted() {
        let record = ProductRecord {
            doc_id: Some("x1".to_string()),
            description: Some(json!("pakai {company_info} di sini")),
            ..Default::default()
        };
        let product = Product::from_record(record, BASE_URL);
        let prompt = build_prompt(&[product], "Halo", BASE_URL).unwrap();
        assert!(prompt.system.contains("pakai {company_info} di sini"));
    }

    #[test]
    fn test_non_ascii_is_preserved() {
        let record = ProductRecord {
            doc_id: Some("x2".to_string()),
            name: Some(json!("Kardus Ekspor Ukuran Besar · Kualitas Ekspor")),
            ..Default::default()
        };
        let json = serialize_catalog(&[Product::from_record(record, BASE_URL)]).unwrap();
        assert!(json.contains("Kardus Ekspor Ukuran Besar · Kualitas Ekspor"));
        assert!(!json.contains("\\u"));
    }

    #[test]
    fn test_shape_is_independent_of_message() {
        let a = build_prompt(&[bubble_wrap()], "Halo", BASE_URL).unwrap();
        let b = build_prompt(&[bubble_wrap()], "Siapa presiden?", BASE_URL).unwrap();
        assert_eq!(a.system, b.system);
    }
}
