//! CSV rendering of the product table.

use stockdash_inventory::Product;

/// Column order is part of the export contract; downstream spreadsheets
/// import by position.
const HEADER: &str = "Code,Name,Category,Current Stock,Minimum Stock,Location,Status";

/// Render the product table as CSV, one row per product, statuses included.
pub fn product_table_csv(products: &[Product]) -> String {
    let mut out = String::from(HEADER);
    out.push('\n');
    for product in products {
        let row = [
            field(product.code.as_str()),
            field(&product.name),
            field(&product.category),
            product.current_stock.to_string(),
            product.minimum_stock.to_string(),
            field(&product.warehouse_location),
            product.status().label().to_string(),
        ];
        out.push_str(&row.join(","));
        out.push('\n');
    }
    out
}

/// RFC 4180 quoting: wrap when the value contains a comma, quote or
/// newline; embedded quotes are doubled.
fn field(value: &str) -> String {
    if value.contains(['"', ',', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
