use std::sync::Arc;

use axum::{Json, extract::Extension, response::IntoResponse};

use stockdash_inventory::{compute_kpis, group_by_category};

use crate::app::AppServices;
use crate::app::routes::common;

/// The four dashboard cards.
pub async fn get_kpis(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let products = match common::load_products(&services) {
        Ok(p) => p,
        Err(resp) => return resp,
    };

    Json(compute_kpis(&products)).into_response()
}

/// Actual-vs-minimum stock per category, in first-seen category order, for
/// the bar chart.
pub async fn get_stock_by_category(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let products = match common::load_products(&services) {
        Ok(p) => p,
        Err(resp) => return resp,
    };

    Json(group_by_category(&products)).into_response()
}
