use std::path::PathBuf;

use anyhow::{bail, Context, Result};

const DEFAULT_GROQ_API_BASE: &str = "https://api.groq.com/openai/v1";
const DEFAULT_CREDENTIALS_PATH: &str = "firebase_credentials.json";
const DEFAULT_PRODUCT_BASE_URL: &str = "http://localhost:3000/produk";

/// Where the Firestore service-account key comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum FirebaseCredentials {
    /// Service-account JSON supplied directly through the environment.
    Inline(String),
    /// Path to a service-account JSON file on disk.
    File(PathBuf),
}

impl FirebaseCredentials {
    /// Returns the raw service-account JSON, reading the file if needed.
    pub fn json(&self) -> Result<String> {
        match self {
            FirebaseCredentials::Inline(json) => Ok(json.clone()),
            FirebaseCredentials::File(path) => std::fs::read_to_string(path).with_context(|| {
                format!(
                    "Firebase credentials not found. Set FIREBASE_SERVICE_ACCOUNT_KEY or provide {}",
                    path.display()
                )
            }),
        }
    }
}

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub groq_api_key: String,
    pub groq_api_base: String,
    pub firebase_credentials: FirebaseCredentials,
    pub firebase_project_id: String,
    pub product_base_url: String,
    /// Upper bound on one completion call. Unset means no bound.
    pub llm_timeout_secs: Option<u64>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup so tests never touch
    /// the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let firebase_credentials = match get("FIREBASE_SERVICE_ACCOUNT_KEY") {
            Some(json) => FirebaseCredentials::Inline(json),
            None => FirebaseCredentials::File(PathBuf::from(
                get("FIREBASE_CREDENTIALS_PATH")
                    .unwrap_or_else(|| DEFAULT_CREDENTIALS_PATH.to_string()),
            )),
        };

        let firebase_project_id = match get("FIREBASE_PROJECT_ID") {
            Some(id) => id,
            None => project_id_from_credentials(&firebase_credentials.json()?)?,
        };

        Ok(Config {
            groq_api_key: get("GROQ_API_KEY")
                .context("Required environment variable 'GROQ_API_KEY' is not set")?,
            groq_api_base: get("GROQ_API_BASE")
                .unwrap_or_else(|| DEFAULT_GROQ_API_BASE.to_string()),
            firebase_credentials,
            firebase_project_id,
            product_base_url: normalize_base_url(
                &get("PRODUCT_BASE_URL").unwrap_or_else(|| DEFAULT_PRODUCT_BASE_URL.to_string()),
            ),
            llm_timeout_secs: get("LLM_TIMEOUT_SECS")
                .map(|secs| secs.parse::<u64>())
                .transpose()
                .context("LLM_TIMEOUT_SECS must be a whole number of seconds")?,
            port: get("PORT")
                .unwrap_or_else(|| "8000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: get("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

/// Reads `project_id` out of a service-account key.
fn project_id_from_credentials(json: &str) -> Result<String> {
    let key: serde_json::Value =
        serde_json::from_str(json).context("Firebase service account key is not valid JSON")?;
    match key.get("project_id").and_then(|v| v.as_str()) {
        Some(id) if !id.is_empty() => Ok(id.to_string()),
        _ => bail!("Set FIREBASE_PROJECT_ID or include project_id in the service account key"),
    }
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
