use std::sync::Arc;

use axum::{Json, Router, extract::Extension, response::IntoResponse, routing::get};

use crate::app::AppServices;
use crate::app::routes::common;

pub fn router() -> Router {
    Router::new()
        .route("/products", get(product_labels))
        .route("/locations", get(location_labels))
}

/// One QR label link per product, list order.
pub async fn product_labels(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let products = match common::load_products(&services) {
        Ok(p) => p,
        Err(resp) => return resp,
    };

    let labels = services.labels.product_labels(&products);
    Json(serde_json::json!({
        "total": labels.len(),
        "labels": labels,
    }))
    .into_response()
}

/// One QR label link per distinct warehouse location, first-seen order.
pub async fn location_labels(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let products = match common::load_products(&services) {
        Ok(p) => p,
        Err(resp) => return resp,
    };

    let labels = services.labels.location_labels(&products);
    Json(serde_json::json!({
        "total": labels.len(),
        "labels": labels,
    }))
    .into_response()
}
