//! Service configuration from environment variables.

use std::path::PathBuf;

/// Runtime configuration, environment-driven with dev defaults.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Socket address to bind, `STOCKDASH_ADDR`.
    pub addr: String,
    /// Optional JSON file holding the product list, `STOCKDASH_PRODUCTS_FILE`.
    /// When unset the service runs on the embedded demo catalog in memory.
    pub products_file: Option<PathBuf>,
    /// Base URL of the web dashboard, used as the QR deep-link target,
    /// `STOCKDASH_DASHBOARD_URL`.
    pub dashboard_url: String,
}

impl ApiConfig {
    pub fn from_env() -> Self {
        let addr =
            std::env::var("STOCKDASH_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".to_string());
        let products_file = std::env::var("STOCKDASH_PRODUCTS_FILE")
            .ok()
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        let dashboard_url = std::env::var("STOCKDASH_DASHBOARD_URL")
            .unwrap_or_else(|_| "http://localhost:5173".to_string());

        if products_file.is_none() {
            tracing::warn!("STOCKDASH_PRODUCTS_FILE not set; running on in-memory demo data");
        }

        Self {
            addr,
            products_file,
            dashboard_url,
        }
    }

    /// In-memory demo configuration (tests).
    pub fn in_memory(dashboard_url: impl Into<String>) -> Self {
        Self {
            addr: "127.0.0.1:0".to_string(),
            products_file: None,
            dashboard_url: dashboard_url.into(),
        }
    }
}
