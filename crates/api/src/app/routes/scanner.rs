//! Endpoints backing the mobile scanning screen: code lookup, quick stock
//! movements, per-product history and physical-count reconciliation.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use chrono::Utc;

use stockdash_core::MovementId;
use stockdash_inventory::{StockMovement, apply_movement, count_difference};
use stockdash_store::{MovementLog, ProductRepository};

use crate::app::AppServices;
use crate::app::dto::{CountRequest, HistoryParams, ProductRow, RecordMovementRequest, ScanRequest};
use crate::app::errors;
use crate::app::routes::common;

const DEFAULT_HISTORY_LIMIT: usize = 10;

pub fn router() -> Router {
    Router::new()
        .route("/scan", post(scan))
        .route("/movements", post(record_movement))
        .route("/movements/:code", get(movement_history))
        .route("/counts", post(physical_count))
}

/// A scanned code is either a product code or a warehouse location label
/// like `A-01`. Products win when both would match.
pub async fn scan(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<ScanRequest>,
) -> axum::response::Response {
    let raw = body.code.trim();
    if raw.is_empty() {
        return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "empty code");
    }

    let products = match common::load_products(&services) {
        Ok(p) => p,
        Err(resp) => return resp,
    };

    if let Some(product) = products.iter().find(|p| p.code.as_str() == raw) {
        return Json(serde_json::json!({
            "kind": "product",
            "found": true,
            "product": ProductRow::from(product),
        }))
        .into_response();
    }

    let at_location: Vec<ProductRow> = products
        .iter()
        .filter(|p| p.warehouse_location == raw)
        .map(ProductRow::from)
        .collect();
    if !at_location.is_empty() {
        return Json(serde_json::json!({
            "kind": "location",
            "found": true,
            "location": raw,
            "total_products": at_location.len(),
            "products": at_location,
        }))
        .into_response();
    }

    errors::json_error(
        StatusCode::NOT_FOUND,
        "not_found",
        format!("code {raw} matches no product or location"),
    )
}

/// Quick movement from the mobile app: applies the stock change, persists
/// the updated list and appends to the movement history.
pub async fn record_movement(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<RecordMovementRequest>,
) -> axum::response::Response {
    let code = match common::parse_code(&body.product_code) {
        Ok(c) => c,
        Err(resp) => return resp,
    };

    let mut products = match common::load_products(&services) {
        Ok(p) => p,
        Err(resp) => return resp,
    };

    let Some(product) = products.iter_mut().find(|p| p.code == code) else {
        return errors::json_error(StatusCode::NOT_FOUND, "not_found", "product not found");
    };

    let new_stock = match apply_movement(product.current_stock, body.kind, body.quantity) {
        Ok(s) => s,
        Err(e) => return errors::domain_error_to_response(e),
    };
    product.current_stock = new_stock;
    let status = product.status();

    if let Err(e) = services.repository.save(&products) {
        return errors::store_error_to_response(e);
    }

    let movement = StockMovement {
        id: MovementId::new(),
        product_code: code.clone(),
        kind: body.kind,
        quantity: body.quantity,
        reference: body.reference,
        recorded_by: body.recorded_by,
        occurred_at: Utc::now(),
    };
    if let Err(e) = services.movements.append(movement.clone()) {
        return errors::store_error_to_response(e);
    }

    tracing::info!(
        product = %code,
        kind = ?body.kind,
        quantity = body.quantity,
        new_stock,
        "stock movement recorded"
    );

    (
        StatusCode::CREATED,
        Json(serde_json::json!({
            "movement_id": movement.id.to_string(),
            "product_code": code.to_string(),
            "new_stock": new_stock,
            "status": status,
            "occurred_at": movement.occurred_at,
        })),
    )
        .into_response()
}

/// Recent movements for one product, newest first.
pub async fn movement_history(
    Extension(services): Extension<Arc<AppServices>>,
    Path(code): Path<String>,
    Query(params): Query<HistoryParams>,
) -> axum::response::Response {
    let code = match common::parse_code(&code) {
        Ok(c) => c,
        Err(resp) => return resp,
    };

    let products = match common::load_products(&services) {
        Ok(p) => p,
        Err(resp) => return resp,
    };
    let Some(product) = products.iter().find(|p| p.code == code) else {
        return errors::json_error(StatusCode::NOT_FOUND, "not_found", "product not found");
    };

    let limit = params.limit.unwrap_or(DEFAULT_HISTORY_LIMIT);
    let movements = match services.movements.history(&code, limit) {
        Ok(m) => m,
        Err(e) => return errors::store_error_to_response(e),
    };

    Json(serde_json::json!({
        "product_code": code.to_string(),
        "current_stock": product.current_stock,
        "total_movements": movements.len(),
        "movements": movements,
    }))
    .into_response()
}

/// Physical count: compare a counted quantity against the booked stock.
/// Reports the difference and which movement would reconcile it; recording
/// that adjustment is a separate, explicit call.
pub async fn physical_count(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<CountRequest>,
) -> axum::response::Response {
    let code = match common::parse_code(&body.product_code) {
        Ok(c) => c,
        Err(resp) => return resp,
    };

    let products = match common::load_products(&services) {
        Ok(p) => p,
        Err(resp) => return resp,
    };
    let Some(product) = products.iter().find(|p| p.code == code) else {
        return errors::json_error(StatusCode::NOT_FOUND, "not_found", "product not found");
    };

    let outcome = count_difference(product.current_stock, body.counted_stock);
    Json(serde_json::json!({
        "product_code": code.to_string(),
        "outcome": outcome,
    }))
    .into_response()
}
