use axum::{Json, http::StatusCode, response::IntoResponse};

pub async fn root() -> impl IntoResponse {
    Json(serde_json::json!({
        "service": "stockdash",
        "message": "Inventory dashboard API",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

pub async fn health() -> StatusCode {
    StatusCode::OK
}
