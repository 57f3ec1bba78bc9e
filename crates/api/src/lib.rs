//! HTTP surface of the inventory dashboard: KPIs, product table, CSV
//! export, QR label links and the mobile scanner endpoints.

pub mod app;
pub mod config;
