use serde::{Deserialize, Serialize};

use stockdash_core::ProductCode;
use stockdash_inventory::{MovementKind, Product, StockStatus};

// -------------------------
// Request DTOs
// -------------------------

/// New product from the dashboard form. Numeric fields the form leaves
/// blank arrive as zero (the aggregator itself never coerces, so sanitize
/// at this boundary).
#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub current_stock: u32,
    #[serde(default)]
    pub minimum_stock: u32,
    #[serde(default)]
    pub unit_cost: f64,
    #[serde(default)]
    pub sale_price: f64,
    #[serde(default)]
    pub warehouse_location: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ScanRequest {
    pub code: String,
}

#[derive(Debug, Deserialize)]
pub struct RecordMovementRequest {
    pub product_code: String,
    pub kind: MovementKind,
    pub quantity: u32,
    #[serde(default)]
    pub reference: Option<String>,
    pub recorded_by: String,
}

#[derive(Debug, Deserialize)]
pub struct CountRequest {
    pub product_code: String,
    pub counted_stock: u32,
}

#[derive(Debug, Deserialize)]
pub struct HistoryParams {
    pub limit: Option<usize>,
}

// -------------------------
// Response DTOs
// -------------------------

/// A product as the table renders it: the stored record plus its derived
/// status tag.
#[derive(Debug, Serialize)]
pub struct ProductRow {
    pub code: String,
    pub name: String,
    pub category: String,
    pub current_stock: u32,
    pub minimum_stock: u32,
    pub unit_cost: f64,
    pub sale_price: f64,
    pub warehouse_location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub status: StockStatus,
}

impl From<&Product> for ProductRow {
    fn from(product: &Product) -> Self {
        Self {
            code: product.code.to_string(),
            name: product.name.clone(),
            category: product.category.clone(),
            current_stock: product.current_stock,
            minimum_stock: product.minimum_stock,
            unit_cost: product.unit_cost,
            sale_price: product.sale_price,
            warehouse_location: product.warehouse_location.clone(),
            description: product.description.clone(),
            status: product.status(),
        }
    }
}

impl CreateProductRequest {
    pub fn into_product(self) -> Result<Product, stockdash_core::DomainError> {
        let code = ProductCode::new(&self.code)?;
        Product::new(
            code,
            self.name,
            self.category,
            self.current_stock,
            self.minimum_stock,
            self.unit_cost,
            self.sale_price,
            self.warehouse_location,
            self.description,
        )
    }
}
