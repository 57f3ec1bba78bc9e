//! Product data sources and the fallback policy.
//!
//! "Fall back to the bundled demo data when the real source fails" is an
//! application-level policy, so it is modelled as a decorator around the
//! source trait rather than baked into any aggregation or storage code.

use std::path::PathBuf;

use thiserror::Error;

use stockdash_inventory::Product;

/// Bundled demo catalog, served when no real data source is configured or
/// the configured one fails.
const SEED_JSON: &str = include_str!("../data/seed_products.json");

/// Failure to obtain a product list from a source.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed product data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Anything a product list can be fetched from.
pub trait ProductSource: Send + Sync {
    fn fetch_products(&self) -> Result<Vec<Product>, FetchError>;
}

/// Reads a JSON product list from disk.
#[derive(Debug)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ProductSource for JsonFileSource {
    fn fetch_products(&self) -> Result<Vec<Product>, FetchError> {
        let raw = std::fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}

/// The embedded demo catalog.
#[derive(Debug, Default)]
pub struct SeedSource;

impl SeedSource {
    pub fn new() -> Self {
        Self
    }
}

impl ProductSource for SeedSource {
    fn fetch_products(&self) -> Result<Vec<Product>, FetchError> {
        Ok(serde_json::from_str(SEED_JSON)?)
    }
}

/// Decorator: try `primary`, fall back to `fallback` when it fails.
#[derive(Debug)]
pub struct FallbackSource<P, F> {
    primary: P,
    fallback: F,
}

impl<P, F> FallbackSource<P, F>
where
    P: ProductSource,
    F: ProductSource,
{
    pub fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }
}

impl<P, F> ProductSource for FallbackSource<P, F>
where
    P: ProductSource,
    F: ProductSource,
{
    fn fetch_products(&self) -> Result<Vec<Product>, FetchError> {
        match self.primary.fetch_products() {
            Ok(products) => Ok(products),
            Err(e) => {
                tracing::warn!(error = %e, "primary product source failed; using fallback");
                self.fallback.fetch_products()
            }
        }
    }
}
