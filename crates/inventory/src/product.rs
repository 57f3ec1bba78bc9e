//! Product record.

use serde::{Deserialize, Serialize};

use stockdash_core::{DomainError, DomainResult, ProductCode};

use crate::status::{StockStatus, classify_stock};

/// One inventory item.
///
/// This is a plain record: products are only ever replaced wholesale (the
/// surrounding application rewrites the full collection on change), so there
/// is no partial-update surface here. Monetary amounts share one currency
/// unit across the system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub code: ProductCode,
    pub name: String,
    /// Open string; the dashboard groups on exact equality. Five canonical
    /// values are in use: Hardware, Electrical, Plumbing, Paint, Tools.
    pub category: String,
    pub current_stock: u32,
    pub minimum_stock: u32,
    pub unit_cost: f64,
    pub sale_price: f64,
    pub warehouse_location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Product {
    /// Validate a caller-supplied record.
    ///
    /// `current_stock < minimum_stock` is deliberately *not* an error:
    /// reporting that relationship is exactly what the status computation
    /// is for.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        code: ProductCode,
        name: impl Into<String>,
        category: impl Into<String>,
        current_stock: u32,
        minimum_stock: u32,
        unit_cost: f64,
        sale_price: f64,
        warehouse_location: impl Into<String>,
        description: Option<String>,
    ) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        for (field, value) in [("unit_cost", unit_cost), ("sale_price", sale_price)] {
            if !value.is_finite() || value < 0.0 {
                return Err(DomainError::validation(format!(
                    "{field} must be a non-negative finite amount"
                )));
            }
        }
        Ok(Self {
            code,
            name,
            category: category.into(),
            current_stock,
            minimum_stock,
            unit_cost,
            sale_price,
            warehouse_location: warehouse_location.into(),
            description,
        })
    }

    /// Stock status derived from the record; never stored.
    pub fn status(&self) -> StockStatus {
        classify_stock(self.current_stock, self.minimum_stock)
    }
}
