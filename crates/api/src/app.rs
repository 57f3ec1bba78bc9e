//! Application wiring: repositories, movement log, router and middleware.

use std::sync::Arc;

use axum::{Extension, Router, routing::get};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use stockdash_export::QrLinkBuilder;
use stockdash_store::{
    FallbackSource, InMemoryMovementLog, InMemoryProductRepository, JsonFileRepository,
    JsonFileSource, MovementLog, ProductRepository, ProductSource, SeedSource,
};

use crate::config::ApiConfig;

pub mod dto;
pub mod errors;
pub mod routes;

/// Shared service dependencies handed to every handler.
pub struct AppServices {
    pub repository: Arc<dyn ProductRepository>,
    pub movements: Arc<dyn MovementLog>,
    pub labels: QrLinkBuilder,
}

/// Build the full application router.
///
/// With a products file configured, the initial list comes from that file
/// with the embedded demo catalog as fallback (fallback-on-failure is a
/// wiring policy, not an aggregation or storage concern), and edits are
/// persisted back to the file. Without one, everything lives in memory.
pub fn build_app(config: &ApiConfig) -> anyhow::Result<Router> {
    let repository: Arc<dyn ProductRepository> = match &config.products_file {
        Some(path) => {
            let initial = FallbackSource::new(JsonFileSource::new(path), SeedSource::new())
                .fetch_products()?;
            let repo = JsonFileRepository::new(path);
            repo.save(&initial)?;
            tracing::info!(
                path = %path.display(),
                products = initial.len(),
                "file-backed product repository ready"
            );
            Arc::new(repo)
        }
        None => {
            let initial = SeedSource::new().fetch_products()?;
            tracing::info!(products = initial.len(), "in-memory product repository ready");
            Arc::new(InMemoryProductRepository::new(initial))
        }
    };

    let services = AppServices {
        repository,
        movements: Arc::new(InMemoryMovementLog::new()),
        labels: QrLinkBuilder::new(&config.dashboard_url),
    };

    Ok(Router::new()
        .route("/", get(routes::system::root))
        .route("/health", get(routes::system::health))
        .nest("/api", routes::router())
        .layer(
            ServiceBuilder::new()
                .layer(Extension(Arc::new(services)))
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        ))
}
