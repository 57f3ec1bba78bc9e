//! QR label links.
//!
//! The system never renders QR images itself; each label carries the URL of
//! a third-party QR image endpoint whose payload is a dashboard deep link
//! (product filter or warehouse-location filter). Printing and scanning
//! happen entirely on the client side.

use serde::Serialize;

use stockdash_inventory::Product;

const DEFAULT_IMAGE_ENDPOINT: &str = "https://api.qrserver.com/v1/create-qr-code/";
const DEFAULT_IMAGE_SIZE: u32 = 300;

/// One printable label: what it points at and where its image lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QrLabel {
    /// Product code or location code, as printed under the QR.
    pub code: String,
    /// Human caption (product name, or the location code again).
    pub caption: String,
    /// Dashboard deep link encoded in the QR.
    pub target: String,
    /// Third-party image URL that renders the QR.
    pub image_url: String,
}

/// Builds label links against a configured dashboard base URL.
#[derive(Debug, Clone)]
pub struct QrLinkBuilder {
    dashboard_url: String,
    image_endpoint: String,
    image_size: u32,
}

impl QrLinkBuilder {
    pub fn new(dashboard_url: impl Into<String>) -> Self {
        let mut dashboard_url = dashboard_url.into();
        while dashboard_url.ends_with('/') {
            dashboard_url.pop();
        }
        Self {
            dashboard_url,
            image_endpoint: DEFAULT_IMAGE_ENDPOINT.to_string(),
            image_size: DEFAULT_IMAGE_SIZE,
        }
    }

    /// Override the QR image service endpoint (tests, self-hosted mirror).
    pub fn with_image_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.image_endpoint = endpoint.into();
        self
    }

    /// Square image size in pixels.
    pub fn with_image_size(mut self, size: u32) -> Self {
        self.image_size = size;
        self
    }

    fn image_url(&self, payload: &str) -> String {
        format!(
            "{}?size={size}x{size}&data={data}",
            self.image_endpoint,
            size = self.image_size,
            data = urlencoding::encode(payload),
        )
    }

    /// Label for one product.
    pub fn product_label(&self, product: &Product) -> QrLabel {
        let target = format!("{}/products/{}", self.dashboard_url, product.code);
        QrLabel {
            code: product.code.to_string(),
            caption: product.name.clone(),
            image_url: self.image_url(&target),
            target,
        }
    }

    /// Label for one warehouse location.
    pub fn location_label(&self, location: &str) -> QrLabel {
        let target = format!("{}/locations/{}", self.dashboard_url, location);
        QrLabel {
            code: location.to_string(),
            caption: location.to_string(),
            image_url: self.image_url(&target),
            target,
        }
    }

    /// Labels for a whole product list, in list order.
    pub fn product_labels(&self, products: &[Product]) -> Vec<QrLabel> {
        products.iter().map(|p| self.product_label(p)).collect()
    }

    /// Labels for every distinct warehouse location in the list,
    /// first-seen order.
    pub fn location_labels(&self, products: &[Product]) -> Vec<QrLabel> {
        let mut seen: Vec<&str> = Vec::new();
        for product in products {
            if !seen.contains(&product.warehouse_location.as_str()) {
                seen.push(product.warehouse_location.as_str());
            }
        }
        seen.into_iter().map(|l| self.location_label(l)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockdash_core::ProductCode;

    fn product(code: &str, location: &str) -> Product {
        Product {
            code: ProductCode::new(code).unwrap(),
            name: format!("product {code}"),
            category: "Hardware".to_string(),
            current_stock: 10,
            minimum_stock: 5,
            unit_cost: 1.0,
            sale_price: 2.0,
            warehouse_location: location.to_string(),
            description: None,
        }
    }

    #[test]
    fn product_label_points_at_the_dashboard_deep_link() {
        let builder = QrLinkBuilder::new("https://dashboard.example/");
        let label = builder.product_label(&product("PROD001", "A-01"));

        assert_eq!(label.target, "https://dashboard.example/products/PROD001");
        assert_eq!(
            label.image_url,
            "https://api.qrserver.com/v1/create-qr-code/?size=300x300\
             &data=https%3A%2F%2Fdashboard.example%2Fproducts%2FPROD001"
        );
    }

    #[test]
    fn payload_is_percent_encoded() {
        let builder = QrLinkBuilder::new("https://dashboard.example");
        let label = builder.location_label("A 01/É");
        assert!(!label.image_url.contains(' '));
        assert!(label.image_url.contains("A%2001%2F%C3%89"));
    }

    #[test]
    fn image_size_and_endpoint_are_configurable() {
        let builder = QrLinkBuilder::new("http://localhost:5173")
            .with_image_endpoint("http://qr.local/render")
            .with_image_size(512);
        let label = builder.location_label("B-02");
        assert!(label.image_url.starts_with("http://qr.local/render?size=512x512&"));
    }

    #[test]
    fn location_labels_deduplicate_in_first_seen_order() {
        let builder = QrLinkBuilder::new("http://localhost:5173");
        let products = vec![
            product("P1", "B-01"),
            product("P2", "A-01"),
            product("P3", "B-01"),
        ];
        let labels = builder.location_labels(&products);
        let codes: Vec<&str> = labels.iter().map(|l| l.code.as_str()).collect();
        assert_eq!(codes, vec!["B-01", "A-01"]);
    }
}
