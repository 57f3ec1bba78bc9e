//! Printable artifacts derived from the product list: the CSV table export
//! and QR label links for products and warehouse locations.

pub mod csv;
pub mod qr;

pub use csv::product_table_csv;
pub use qr::{QrLabel, QrLinkBuilder};
