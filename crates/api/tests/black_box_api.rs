use reqwest::StatusCode;
use serde_json::json;

use stockdash_api::config::ApiConfig;

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn(config: ApiConfig) -> Self {
        // Build the same router as prod, but bind to an ephemeral port.
        let app = stockdash_api::app::build_app(&config).expect("failed to build app");
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }

    async fn spawn_in_memory() -> Self {
        Self::spawn(ApiConfig::in_memory("http://localhost:5173")).await
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[tokio::test]
async fn health_and_banner_respond() {
    let server = TestServer::spawn_in_memory().await;
    let client = reqwest::Client::new();

    let health = client
        .get(format!("{}/health", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(health.status(), StatusCode::OK);

    let root: serde_json::Value = client
        .get(&server.base_url)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(root["service"], "stockdash");
}

#[tokio::test]
async fn kpis_are_consistent_with_the_product_table() {
    let server = TestServer::spawn_in_memory().await;
    let client = reqwest::Client::new();

    let table: serde_json::Value = client
        .get(format!("{}/api/products", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let rows = table["products"].as_array().unwrap();
    assert!(!rows.is_empty());

    let kpis: serde_json::Value = client
        .get(format!("{}/api/kpis", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(kpis["total_products"].as_u64().unwrap(), rows.len() as u64);

    let critical_rows = rows
        .iter()
        .filter(|r| r["status"] == "critical")
        .count() as u64;
    assert_eq!(kpis["critical_products"].as_u64().unwrap(), critical_rows);

    let expected_value: f64 = rows
        .iter()
        .map(|r| r["current_stock"].as_f64().unwrap() * r["sale_price"].as_f64().unwrap())
        .sum();
    let value = kpis["inventory_value"].as_f64().unwrap();
    assert!((value - expected_value).abs() < 1e-6);
}

#[tokio::test]
async fn stock_by_category_covers_every_category_once() {
    let server = TestServer::spawn_in_memory().await;
    let client = reqwest::Client::new();

    let groups: serde_json::Value = client
        .get(format!("{}/api/stock-by-category", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let groups = groups.as_array().unwrap();

    let mut seen: Vec<&str> = Vec::new();
    for group in groups {
        let category = group["category"].as_str().unwrap();
        assert!(!seen.contains(&category), "duplicate group {category}");
        seen.push(category);
        assert!(group["total_stock"].as_u64().is_some());
        assert!(group["total_minimum"].as_u64().is_some());
    }
    assert!(seen.contains(&"Hardware"));
}

#[tokio::test]
async fn product_lifecycle_create_duplicate_delete() {
    let server = TestServer::spawn_in_memory().await;
    let client = reqwest::Client::new();

    let body = json!({
        "code": "TEST001",
        "name": "Test widget",
        "category": "Tools",
        "current_stock": 9,
        "minimum_stock": 10,
        "unit_cost": 1.5,
        "sale_price": 3.0,
        "warehouse_location": "Z-99"
    });

    let created: serde_json::Value = {
        let resp = client
            .post(format!("{}/api/products", server.base_url))
            .json(&body)
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);
        resp.json().await.unwrap()
    };
    // 9 <= 10: straight to critical.
    assert_eq!(created["status"], "critical");

    let duplicate = client
        .post(format!("{}/api/products", server.base_url))
        .json(&body)
        .send()
        .await
        .unwrap();
    assert_eq!(duplicate.status(), StatusCode::CONFLICT);

    let fetched = client
        .get(format!("{}/api/products/TEST001", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(fetched.status(), StatusCode::OK);

    let deleted = client
        .delete(format!("{}/api/products/TEST001", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(deleted.status(), StatusCode::OK);

    let gone = client
        .get(format!("{}/api/products/TEST001", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(gone.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn create_product_defaults_missing_numeric_fields_to_zero() {
    let server = TestServer::spawn_in_memory().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{}/api/products", server.base_url))
        .json(&json!({ "code": "BARE001", "name": "Bare minimum" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let row: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(row["current_stock"], 0);
    assert_eq!(row["sale_price"], 0.0);
    // 0 <= 0: an empty shelf with no threshold still reads critical.
    assert_eq!(row["status"], "critical");
}

#[tokio::test]
async fn csv_export_has_the_contract_header() {
    let server = TestServer::spawn_in_memory().await;
    let client = reqwest::Client::new();

    let resp = client
        .get(format!("{}/api/products/export", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(
        resp.headers()[reqwest::header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/csv")
    );

    let body = resp.text().await.unwrap();
    assert!(
        body.starts_with("Code,Name,Category,Current Stock,Minimum Stock,Location,Status\n")
    );
    assert!(body.lines().count() > 1);
}

#[tokio::test]
async fn scan_resolves_products_locations_and_unknowns() {
    let server = TestServer::spawn_in_memory().await;
    let client = reqwest::Client::new();
    let scan_url = format!("{}/api/scanner/scan", server.base_url);

    let product: serde_json::Value = client
        .post(&scan_url)
        .json(&json!({ "code": "PROD001" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(product["kind"], "product");
    assert_eq!(product["product"]["code"], "PROD001");

    let location: serde_json::Value = client
        .post(&scan_url)
        .json(&json!({ "code": "A-01" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(location["kind"], "location");
    assert!(location["total_products"].as_u64().unwrap() >= 1);

    let unknown = client
        .post(&scan_url)
        .json(&json!({ "code": "NOPE-999-X" }))
        .send()
        .await
        .unwrap();
    assert_eq!(unknown.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn movements_update_stock_and_show_in_history() {
    let server = TestServer::spawn_in_memory().await;
    let client = reqwest::Client::new();
    let movements_url = format!("{}/api/scanner/movements", server.base_url);

    let before: serde_json::Value = client
        .get(format!("{}/api/products/PROD001", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let stock_before = before["current_stock"].as_u64().unwrap();

    let recorded: serde_json::Value = {
        let resp = client
            .post(&movements_url)
            .json(&json!({
                "product_code": "PROD001",
                "kind": "inbound",
                "quantity": 25,
                "reference": "PO-2026-001",
                "recorded_by": "mobile-user"
            }))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);
        resp.json().await.unwrap()
    };
    assert_eq!(recorded["new_stock"].as_u64().unwrap(), stock_before + 25);

    let history: serde_json::Value = client
        .get(format!(
            "{}/api/scanner/movements/PROD001?limit=5",
            server.base_url
        ))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(history["total_movements"].as_u64().unwrap(), 1);
    assert_eq!(history["movements"][0]["quantity"], 25);
    assert_eq!(history["movements"][0]["reference"], "PO-2026-001");

    // Draining more than the shelf holds violates the no-negative-stock rule.
    let overdraw = client
        .post(&movements_url)
        .json(&json!({
            "product_code": "PROD001",
            "kind": "outbound",
            "quantity": 1_000_000,
            "recorded_by": "mobile-user"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(overdraw.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn physical_count_reports_the_reconciling_adjustment() {
    let server = TestServer::spawn_in_memory().await;
    let client = reqwest::Client::new();

    let before: serde_json::Value = client
        .get(format!("{}/api/products/PROD002", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let system = before["current_stock"].as_u64().unwrap();

    let count: serde_json::Value = client
        .post(format!("{}/api/scanner/counts", server.base_url))
        .json(&json!({ "product_code": "PROD002", "counted_stock": system - 10 }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(count["outcome"]["difference"].as_i64().unwrap(), -10);
    assert_eq!(count["outcome"]["adjustment"], "outbound");
}

#[tokio::test]
async fn labels_list_products_and_distinct_locations() {
    let server = TestServer::spawn_in_memory().await;
    let client = reqwest::Client::new();

    let products: serde_json::Value = client
        .get(format!("{}/api/labels/products", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let first = &products["labels"][0];
    assert!(
        first["image_url"]
            .as_str()
            .unwrap()
            .contains("create-qr-code")
    );
    assert!(
        first["target"]
            .as_str()
            .unwrap()
            .starts_with("http://localhost:5173/products/")
    );

    let locations: serde_json::Value = client
        .get(format!("{}/api/labels/locations", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let labels = locations["labels"].as_array().unwrap();
    let mut codes: Vec<&str> = labels.iter().map(|l| l["code"].as_str().unwrap()).collect();
    let total = codes.len();
    codes.dedup();
    assert_eq!(codes.len(), total, "locations must be distinct");
}

#[tokio::test]
async fn file_backed_mode_persists_edits_across_restarts() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("products.json");
    let config = ApiConfig {
        addr: "127.0.0.1:0".to_string(),
        products_file: Some(path.clone()),
        dashboard_url: "http://localhost:5173".to_string(),
    };

    {
        let server = TestServer::spawn(config.clone()).await;
        let client = reqwest::Client::new();
        let resp = client
            .post(format!("{}/api/products", server.base_url))
            .json(&json!({ "code": "PERSIST1", "name": "Survives restarts" }))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    // A fresh server over the same file sees the edit.
    let server = TestServer::spawn(config).await;
    let client = reqwest::Client::new();
    let fetched = client
        .get(format!("{}/api/products/PERSIST1", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(fetched.status(), StatusCode::OK);
}
