use axum::{Router, routing::get};

pub mod common;
pub mod dashboard;
pub mod labels;
pub mod products;
pub mod scanner;
pub mod system;

/// Router for everything under `/api`.
pub fn router() -> Router {
    Router::new()
        .route("/kpis", get(dashboard::get_kpis))
        .route("/stock-by-category", get(dashboard::get_stock_by_category))
        .nest("/products", products::router())
        .nest("/labels", labels::router())
        .nest("/scanner", scanner::router())
}
