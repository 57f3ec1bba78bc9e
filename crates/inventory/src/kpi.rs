//! Dashboard aggregation: KPIs and per-category stock totals.
//!
//! Every function here is a single-pass, referentially transparent
//! computation over a borrowed product list. Nothing is mutated, nothing is
//! cached and duplicate codes are not deduplicated (that is the caller's
//! concern, if it is anyone's).

use serde::{Deserialize, Serialize};

use crate::product::Product;
use crate::status::StockStatus;

/// The four dashboard summary figures.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct InventoryKpis {
    /// Count of products in the list (duplicates included).
    pub total_products: u64,
    /// Count of products classifying as [`StockStatus::Critical`].
    pub critical_products: u64,
    /// Σ `current_stock * sale_price`.
    pub inventory_value: f64,
    /// Σ `current_stock * unit_cost`.
    pub total_storage_cost: f64,
}

/// Stock totals for one product category, feeding the actual-vs-minimum
/// bar chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryStock {
    pub category: String,
    pub total_stock: u64,
    pub total_minimum: u64,
}

/// Compute the dashboard KPIs over a product list.
///
/// The empty list yields all zeros. The result is independent of list order
/// (all four fields are counts or commutative sums).
pub fn compute_kpis(products: &[Product]) -> InventoryKpis {
    let mut kpis = InventoryKpis::default();
    for product in products {
        kpis.total_products += 1;
        if product.status() == StockStatus::Critical {
            kpis.critical_products += 1;
        }
        kpis.inventory_value += f64::from(product.current_stock) * product.sale_price;
        kpis.total_storage_cost += f64::from(product.current_stock) * product.unit_cost;
    }
    kpis
}

/// Group products by exact category string, preserving first-seen order.
pub fn group_by_category(products: &[Product]) -> Vec<CategoryStock> {
    let mut groups: Vec<CategoryStock> = Vec::new();
    for product in products {
        let idx = match groups.iter().position(|g| g.category == product.category) {
            Some(i) => i,
            None => {
                groups.push(CategoryStock {
                    category: product.category.clone(),
                    total_stock: 0,
                    total_minimum: 0,
                });
                groups.len() - 1
            }
        };
        groups[idx].total_stock += u64::from(product.current_stock);
        groups[idx].total_minimum += u64::from(product.minimum_stock);
    }
    groups
}
