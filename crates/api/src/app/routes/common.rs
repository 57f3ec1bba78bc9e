//! Helpers shared by route handlers.

use stockdash_core::ProductCode;
use stockdash_inventory::Product;
use stockdash_store::ProductRepository;

use crate::app::AppServices;
use crate::app::errors;

/// Load the product list, turning storage failures into a ready-made
/// 500 response.
pub fn load_products(services: &AppServices) -> Result<Vec<Product>, axum::response::Response> {
    services
        .repository
        .load()
        .map_err(errors::store_error_to_response)
}

/// Parse a path/body product code into the domain type.
pub fn parse_code(raw: &str) -> Result<ProductCode, axum::response::Response> {
    raw.parse::<ProductCode>()
        .map_err(errors::domain_error_to_response)
}
