//! Product list persistence.
//!
//! The application always rewrites the full collection on change (matching
//! the product lifecycle: wholesale replacement, no partial updates), so the
//! repository surface is just `load` and `save`.

use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use thiserror::Error;

use stockdash_inventory::Product;

/// Storage-layer error.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// A lock was poisoned by a panicking writer.
    #[error("store lock poisoned")]
    Poisoned,
}

/// Owns the product list. `save` replaces the whole list atomically from
/// the caller's point of view.
pub trait ProductRepository: Send + Sync {
    fn load(&self) -> Result<Vec<Product>, StoreError>;
    fn save(&self, products: &[Product]) -> Result<(), StoreError>;
}

impl<S> ProductRepository for Arc<S>
where
    S: ProductRepository + ?Sized,
{
    fn load(&self) -> Result<Vec<Product>, StoreError> {
        (**self).load()
    }

    fn save(&self, products: &[Product]) -> Result<(), StoreError> {
        (**self).save(products)
    }
}

/// In-memory repository for dev/tests.
#[derive(Debug)]
pub struct InMemoryProductRepository {
    inner: RwLock<Vec<Product>>,
}

impl InMemoryProductRepository {
    pub fn new(seed: Vec<Product>) -> Self {
        Self {
            inner: RwLock::new(seed),
        }
    }
}

impl Default for InMemoryProductRepository {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl ProductRepository for InMemoryProductRepository {
    fn load(&self) -> Result<Vec<Product>, StoreError> {
        let guard = self.inner.read().map_err(|_| StoreError::Poisoned)?;
        Ok(guard.clone())
    }

    fn save(&self, products: &[Product]) -> Result<(), StoreError> {
        let mut guard = self.inner.write().map_err(|_| StoreError::Poisoned)?;
        *guard = products.to_vec();
        Ok(())
    }
}

/// File-backed repository: the whole list is one JSON document, rewritten
/// on every save. Good enough for a single-process dashboard; durability
/// guarantees are out of scope.
#[derive(Debug)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    /// True when the backing file does not exist yet (first run).
    pub fn is_empty(&self) -> bool {
        !self.path.exists()
    }
}

impl ProductRepository for JsonFileRepository {
    fn load(&self) -> Result<Vec<Product>, StoreError> {
        let raw = std::fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    fn save(&self, products: &[Product]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(products)?;
        std::fs::write(&self.path, raw)?;
        Ok(())
    }
}
