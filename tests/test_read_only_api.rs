//! End-to-end test: load a product fixture from disk, serve the read-only API
//! in-process on an ephemeral port, and exercise every route over HTTP.

use catalog_api::domain::schema::catalog;
use catalog_api::transport;
use catalog_api::ResourceCache;
use serde_json::{json, Value};
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

static TEST_DIR_SEQ: AtomicUsize = AtomicUsize::new(0);

fn fixture_products() -> Value {
    json!([
        {
            "id": 1,
            "title": "Laptop X",
            "category": "Laptop",
            "price": 999,
            "image": "x.png",
            "createdAt": "2024-01-01T00:00:00Z",
            "updatedAt": "2024-01-02T00:00:00Z",
            "cpu": "i7-13700H",
            "ram": 16,
            "serialNumber": "SN-0001"
        },
        {
            "id": 2,
            "title": "Gaming Mouse",
            "category": "Accessory",
            "price": 49,
            "image": "mouse.png"
        },
        {
            "id": 3,
            "title": "laptop pro 15",
            "category": "laptop",
            "price": 1999,
            "image": "pro.png",
            "brand": "Acme"
        }
    ])
}

async fn fresh_data_dir() -> PathBuf {
    let seq = TEST_DIR_SEQ.fetch_add(1, Ordering::SeqCst);
    let dir = std::env::temp_dir().join(format!(
        "catalog-api-e2e-{}-{}",
        std::process::id(),
        seq
    ));
    tokio::fs::create_dir_all(&dir).await.unwrap();
    dir
}

/// Loads the cache from `data_dir`, binds an ephemeral port and serves the
/// router in the background. Returns the base URL.
async fn start_server(data_dir: &PathBuf) -> String {
    let registry = Arc::new(catalog::catalog_registry());
    let cache = Arc::new(ResourceCache::load_all(&registry, data_dir).await.unwrap());
    let app_state = transport::http::AppState { cache, registry };
    let router = transport::http::create_router(app_state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    format!("http://127.0.0.1:{port}")
}

async fn start_server_with_fixture() -> String {
    let data_dir = fresh_data_dir().await;
    tokio::fs::write(
        data_dir.join("product.json"),
        serde_json::to_vec_pretty(&fixture_products()).unwrap(),
    )
    .await
    .unwrap();
    start_server(&data_dir).await
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_list_returns_projected_records_in_order() {
    let base_url = start_server_with_fixture().await;
    let client = reqwest::Client::new();

    let resp = client
        .get(format!("{base_url}/products"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let body: Value = resp.json().await.unwrap();
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 3);

    // Source-file order is preserved.
    let ids: Vec<i64> = items.iter().map(|i| i["id"].as_i64().unwrap()).collect();
    assert_eq!(ids, vec![1, 2, 3]);

    // Projection keeps exactly the list fields and drops the rest.
    let first = items[0].as_object().unwrap();
    assert_eq!(first["title"], "Laptop X");
    assert_eq!(first["category"], "Laptop");
    assert_eq!(first["image"], "x.png");
    assert_eq!(first["createdAt"], "2024-01-01T00:00:00Z");
    assert!(!first.contains_key("price"));
    assert!(!first.contains_key("cpu"));
    assert!(!first.contains_key("serialNumber"));

    // Absent system fields are omitted, not serialized as null.
    let second = items[1].as_object().unwrap();
    assert!(!second.contains_key("createdAt"));
    assert!(!second.contains_key("updatedAt"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_list_filters() {
    let base_url = start_server_with_fixture().await;
    let client = reqwest::Client::new();

    // Case-insensitive substring search on title.
    let body: Value = client
        .get(format!("{base_url}/products?search=LAPTOP"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let ids: Vec<i64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 3]);

    // Case-insensitive exact match on category.
    let body: Value = client
        .get(format!("{base_url}/products?category=laptop"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let ids: Vec<i64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 3]);

    // Both filters are ANDed.
    let body: Value = client
        .get(format!("{base_url}/products?search=pro&category=Laptop"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let ids: Vec<i64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![3]);

    // No match yields an empty array, not an error.
    let body: Value = client
        .get(format!("{base_url}/products?search=zzz"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body.as_array().unwrap().len(), 0);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_detail_returns_full_record() {
    let base_url = start_server_with_fixture().await;
    let client = reqwest::Client::new();

    let resp = client
        .get(format!("{base_url}/products/1"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["success"], true);
    // Wrapped under a key named after the resource type, with every field.
    assert_eq!(body["product"]["title"], "Laptop X");
    assert_eq!(body["product"]["price"], 999);
    assert_eq!(body["product"]["cpu"], "i7-13700H");
    assert_eq!(body["product"]["serialNumber"], "SN-0001");

    // Repeated lookups return equal records (nothing mutates the cache).
    let again: Value = client
        .get(format!("{base_url}/products/1"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body, again);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_detail_miss_and_bad_id() {
    let base_url = start_server_with_fixture().await;
    let client = reqwest::Client::new();

    let resp = client
        .get(format!("{base_url}/products/99"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "product with id '99' not found.");

    // Non-numeric ids are a miss carrying the raw id text.
    let resp = client
        .get(format!("{base_url}/products/abc"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["message"], "product with id 'abc' not found.");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_write_methods_are_rejected() {
    let base_url = start_server_with_fixture().await;
    let client = reqwest::Client::new();

    // POST with a perfectly valid payload is still rejected.
    let resp = client
        .post(format!("{base_url}/products"))
        .json(&json!({
            "title": "New Laptop",
            "category": "Laptop",
            "price": 1,
            "image": "new.png"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 405);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "Method not supported");
    assert!(body["message"].as_str().unwrap().contains("read-only"));

    // So is POST with a garbage body; it is never inspected.
    let resp = client
        .post(format!("{base_url}/products"))
        .body("not json at all")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 405);

    let resp = client
        .put(format!("{base_url}/products/1"))
        .json(&json!({"price": 1}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 405);

    let resp = client
        .delete(format!("{base_url}/products/1"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 405);

    // And the cache is untouched afterwards.
    let body: Value = client
        .get(format!("{base_url}/products"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body.as_array().unwrap().len(), 3);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_missing_data_file_serves_empty_list() {
    let data_dir = fresh_data_dir().await;
    let base_url = start_server(&data_dir).await;
    let client = reqwest::Client::new();

    let resp = client
        .get(format!("{base_url}/products"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body.as_array().unwrap().len(), 0);
}

#[test]
fn test_openapi_documents_every_write_rejection() {
    use utoipa::OpenApi;

    let doc: Value = serde_json::to_value(transport::http::ApiDoc::openapi()).unwrap();
    // Every write route the router rejects shows up in the Swagger surface.
    assert!(doc["paths"]["/{resources}"]["post"].is_object());
    assert!(doc["paths"]["/{resources}/{id}"]["put"].is_object());
    assert!(doc["paths"]["/{resources}/{id}"]["delete"].is_object());
    // And the read routes are still there.
    assert!(doc["paths"]["/{resources}"]["get"].is_object());
    assert!(doc["paths"]["/{resources}/{id}"]["get"].is_object());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_healthcheck_reports_counts() {
    let base_url = start_server_with_fixture().await;
    let client = reqwest::Client::new();

    let resp = client
        .get(format!("{base_url}/health"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["status"], "ok");
    assert_eq!(body["data"]["resource_types"]["product"], 3);
}
