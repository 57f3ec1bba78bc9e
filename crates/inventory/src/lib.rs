//! Inventory domain module.
//!
//! This crate contains the business rules for inventory, implemented purely
//! as deterministic domain logic (no IO, no HTTP, no storage): per-product
//! stock-status classification, dashboard KPI aggregation, per-category
//! stock grouping and stock-movement arithmetic.

pub mod kpi;
pub mod movement;
pub mod product;
pub mod status;

pub use kpi::{CategoryStock, InventoryKpis, compute_kpis, group_by_category};
pub use movement::{
    CountOutcome, MovementKind, StockMovement, apply_movement, count_difference,
};
pub use product::Product;
pub use status::{StockStatus, classify_stock};
