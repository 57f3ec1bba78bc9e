use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::get,
};

use stockdash_export::product_table_csv;
use stockdash_store::ProductRepository;

use crate::app::AppServices;
use crate::app::dto::{CreateProductRequest, ProductRow};
use crate::app::errors;
use crate::app::routes::common;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route("/export", get(export_csv))
        .route("/:code", get(get_product).delete(delete_product))
}

pub async fn list_products(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let products = match common::load_products(&services) {
        Ok(p) => p,
        Err(resp) => return resp,
    };

    let rows: Vec<ProductRow> = products.iter().map(ProductRow::from).collect();
    Json(serde_json::json!({
        "total": rows.len(),
        "products": rows,
    }))
    .into_response()
}

pub async fn create_product(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<CreateProductRequest>,
) -> axum::response::Response {
    let product = match body.into_product() {
        Ok(p) => p,
        Err(e) => return errors::domain_error_to_response(e),
    };

    let mut products = match common::load_products(&services) {
        Ok(p) => p,
        Err(resp) => return resp,
    };

    if products.iter().any(|p| p.code == product.code) {
        return errors::json_error(
            StatusCode::CONFLICT,
            "conflict",
            format!("product code {} already exists", product.code),
        );
    }

    let row = ProductRow::from(&product);
    products.push(product);
    if let Err(e) = services.repository.save(&products) {
        return errors::store_error_to_response(e);
    }

    (StatusCode::CREATED, Json(row)).into_response()
}

pub async fn get_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(code): Path<String>,
) -> axum::response::Response {
    let code = match common::parse_code(&code) {
        Ok(c) => c,
        Err(resp) => return resp,
    };

    let products = match common::load_products(&services) {
        Ok(p) => p,
        Err(resp) => return resp,
    };

    match products.iter().find(|p| p.code == code) {
        Some(product) => Json(ProductRow::from(product)).into_response(),
        None => errors::json_error(StatusCode::NOT_FOUND, "not_found", "product not found"),
    }
}

pub async fn delete_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(code): Path<String>,
) -> axum::response::Response {
    let code = match common::parse_code(&code) {
        Ok(c) => c,
        Err(resp) => return resp,
    };

    let mut products = match common::load_products(&services) {
        Ok(p) => p,
        Err(resp) => return resp,
    };

    let before = products.len();
    products.retain(|p| p.code != code);
    if products.len() == before {
        return errors::json_error(StatusCode::NOT_FOUND, "not_found", "product not found");
    }

    if let Err(e) = services.repository.save(&products) {
        return errors::store_error_to_response(e);
    }

    Json(serde_json::json!({
        "deleted": code.to_string(),
        "remaining": products.len(),
    }))
    .into_response()
}

pub async fn export_csv(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let products = match common::load_products(&services) {
        Ok(p) => p,
        Err(resp) => return resp,
    };

    let csv = product_table_csv(&products);
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"inventory.csv\"",
            ),
        ],
        csv,
    )
        .into_response()
}
