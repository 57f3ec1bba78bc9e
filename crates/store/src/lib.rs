//! Storage layer: product repositories, data sources and the movement log.
//!
//! The domain crates never touch IO; everything that loads, persists or
//! falls back lives here behind small traits so the API layer can be wired
//! against in-memory doubles in tests.

pub mod movements;
pub mod repository;
pub mod source;

pub use movements::{InMemoryMovementLog, MovementLog};
pub use repository::{
    InMemoryProductRepository, JsonFileRepository, ProductRepository, StoreError,
};
pub use source::{FallbackSource, FetchError, JsonFileSource, ProductSource, SeedSource};
