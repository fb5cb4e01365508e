use std::sync::Arc;

use fulfilment_api::app::{self, services::AppServices};
use reqwest::StatusCode;
use serde_json::json;

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn(seed_demo: bool) -> Self {
        // Same router as prod, bound to an ephemeral port.
        let services = Arc::new(AppServices::in_memory(seed_demo).expect("services"));
        let app = app::build_app(services);
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
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[tokio::test]
async fn health_is_ok_and_echoes_request_id() {
    let srv = TestServer::spawn(false).await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/health", srv.base_url))
        .header("x-request-id", "req-123")
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.headers()["x-request-id"], "req-123");
}

#[tokio::test]
async fn lists_seeded_warehouses() {
    let srv = TestServer::spawn(true).await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/warehouse", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body: serde_json::Value = res.json().await.unwrap();
    let codes: Vec<_> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|w| w["businessUnitCode"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(codes, vec!["MWH.001", "MWH.012", "MWH.023"]);

    let res = client
        .get(format!("{}/warehouse/MWH.001", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let one: serde_json::Value = res.json().await.unwrap();
    assert_eq!(one["location"], "ZWOLLE-001");
}

#[tokio::test]
async fn unknown_warehouse_is_404_for_get_and_archive() {
    let srv = TestServer::spawn(false).await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/warehouse/NON-EXISTENT", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = client
        .delete(format!("{}/warehouse/GHOST-99", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn warehouse_lifecycle_over_http() {
    let srv = TestServer::spawn(false).await;
    let client = reqwest::Client::new();

    // Create
    let res = client
        .post(format!("{}/warehouse", srv.base_url))
        .json(&json!({
            "businessUnitCode": "NEW.001",
            "location": "ZWOLLE-001",
            "capacity": 30,
            "stock": 10
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let created: serde_json::Value = res.json().await.unwrap();
    assert!(created["createdAt"].is_string());

    // Density ceiling of ZWOLLE-001 is one.
    let res = client
        .post(format!("{}/warehouse", srv.base_url))
        .json(&json!({
            "businessUnitCode": "NEW.002",
            "location": "ZWOLLE-001",
            "capacity": 10,
            "stock": 0
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "capacity_exceeded");

    // Duplicate code
    let res = client
        .post(format!("{}/warehouse", srv.base_url))
        .json(&json!({
            "businessUnitCode": "NEW.001",
            "location": "AMSTERDAM-001",
            "capacity": 10,
            "stock": 0
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CONFLICT);

    // Replace: the path code wins over the body.
    let res = client
        .post(format!("{}/warehouse/NEW.001/replacement", srv.base_url))
        .json(&json!({
            "businessUnitCode": "IGNORED",
            "location": "ZWOLLE-001",
            "capacity": 20,
            "stock": 10
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let replaced: serde_json::Value = res.json().await.unwrap();
    assert_eq!(replaced["businessUnitCode"], "NEW.001");
    assert_eq!(replaced["capacity"], 20);
    assert_eq!(replaced["createdAt"], created["createdAt"]);

    // Stock mismatch
    let res = client
        .post(format!("{}/warehouse/NEW.001/replacement", srv.base_url))
        .json(&json!({ "location": "ZWOLLE-001", "capacity": 20, "stock": 11 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "invalid_state");

    // Archive, twice.
    for _ in 0..2 {
        let res = client
            .delete(format!("{}/warehouse/NEW.001", srv.base_url))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::NO_CONTENT);
    }

    let res = client
        .get(format!("{}/warehouse/NEW.001", srv.base_url))
        .send()
        .await
        .unwrap();
    let archived: serde_json::Value = res.json().await.unwrap();
    assert!(archived["archivedAt"].is_string());

    // The slot at ZWOLLE-001 is free again.
    let res = client
        .post(format!("{}/warehouse", srv.base_url))
        .json(&json!({
            "businessUnitCode": "NEW.002",
            "location": "ZWOLLE-001",
            "capacity": 10,
            "stock": 0
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn unknown_location_is_rejected() {
    let srv = TestServer::spawn(false).await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/warehouse", srv.base_url))
        .json(&json!({
            "businessUnitCode": "TEST-API-01",
            "location": "Den Haag",
            "capacity": 500,
            "stock": 0
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "location_not_found");
}

#[tokio::test]
async fn malformed_warehouse_bodies_get_json_validation_errors() {
    let srv = TestServer::spawn(false).await;
    let client = reqwest::Client::new();

    let bodies = [
        json!({
            "businessUnitCode": "NEW.001",
            "location": "ZWOLLE-001",
            "capacity": -5,
            "stock": 0
        }),
        json!({ "businessUnitCode": "NEW.001", "capacity": 10, "stock": 0 }),
    ];

    for body in bodies {
        let res = client
            .post(format!("{}/warehouse", srv.base_url))
            .json(&body)
            .send()
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        assert!(
            res.headers()["content-type"]
                .to_str()
                .unwrap()
                .starts_with("application/json")
        );
        let err: serde_json::Value = res.json().await.unwrap();
        assert_eq!(err["error"], "validation_error");
        assert!(err["message"].is_string());
    }

    let res = client
        .post(format!("{}/warehouse/MWH.001/replacement", srv.base_url))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let err: serde_json::Value = res.json().await.unwrap();
    assert_eq!(err["error"], "validation_error");
}

#[tokio::test]
async fn product_crud_over_http() {
    let srv = TestServer::spawn(true).await;
    let client = reqwest::Client::new();
    let url = |path: &str| format!("{}/product{}", srv.base_url, path);

    let res = client.get(url("")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let all: serde_json::Value = res.json().await.unwrap();
    let names: Vec<_> = all
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["TONSTAD", "KALLAX", "BESTÅ"]);

    let res = client.get(url("/1")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let one: serde_json::Value = res.json().await.unwrap();
    assert_eq!(one["name"], "TONSTAD");
    assert!(one["price"].is_null());

    let res = client
        .post(url(""))
        .json(&json!({ "name": "MALM", "price": 14900, "stock": 20 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let created: serde_json::Value = res.json().await.unwrap();
    assert_eq!(created["name"], "MALM");
    assert_eq!(created["id"], 4);

    let res = client
        .post(url(""))
        .json(&json!({ "id": 100, "name": "INVALID" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let res = client
        .put(url("/2"))
        .json(&json!({ "name": "KALLAX-REVISED", "stock": 99 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let updated: serde_json::Value = res.json().await.unwrap();
    assert_eq!(updated["name"], "KALLAX-REVISED");
    assert_eq!(updated["stock"], 99);

    let res = client
        .put(url("/2"))
        .json(&json!({ "stock": 1 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let res = client
        .put(url("/9999"))
        .json(&json!({ "name": "Ghost Product" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let err: serde_json::Value = res.json().await.unwrap();
    assert_eq!(err["message"], "Product with id of 9999 does not exist.");

    let res = client.delete(url("/3")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NO_CONTENT);
    let res = client.get(url("/3")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let res = client.delete(url("/8888")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn store_crud_over_http() {
    let srv = TestServer::spawn(true).await;
    let client = reqwest::Client::new();
    let url = |path: &str| format!("{}/store{}", srv.base_url, path);

    let res = client.get(url("")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let all: serde_json::Value = res.json().await.unwrap();
    assert_eq!(all.as_array().unwrap().len(), 3);

    let res = client.get(url("/2")).send().await.unwrap();
    let kallax: serde_json::Value = res.json().await.unwrap();
    assert_eq!(kallax["quantityProductsInStock"], 5);

    let res = client.get(url("/999")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let err: serde_json::Value = res.json().await.unwrap();
    assert_eq!(err["message"], "Store with id of 999 does not exist.");

    let res = client
        .post(url(""))
        .json(&json!({ "name": "NEW_TEST_STORE", "quantityProductsInStock": 50 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let created: serde_json::Value = res.json().await.unwrap();
    assert_eq!(created["name"], "NEW_TEST_STORE");
    assert!(created["id"].is_u64());

    let res = client
        .post(url(""))
        .json(&json!({ "id": 100, "name": "INVALID" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let res = client
        .put(url("/2"))
        .json(&json!({ "name": "KALLAX_UPDATED", "quantityProductsInStock": 20 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let replaced: serde_json::Value = res.json().await.unwrap();
    assert_eq!(replaced["name"], "KALLAX_UPDATED");
    assert_eq!(replaced["quantityProductsInStock"], 20);

    let res = client.put(url("/2")).json(&json!({})).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let res = client
        .patch(url("/3"))
        .json(&json!({ "quantityProductsInStock": 15 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let patched: serde_json::Value = res.json().await.unwrap();
    assert_eq!(patched["name"], "BESTÅ");
    assert_eq!(patched["quantityProductsInStock"], 15);

    for (method, path) in [
        (reqwest::Method::PUT, "/9999"),
        (reqwest::Method::PATCH, "/9999"),
    ] {
        let res = client
            .request(method, url(path))
            .json(&json!({ "name": "NON_EXISTENT" }))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    let res = client.delete(url("/1")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NO_CONTENT);
    let res = client.delete(url("/9999")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}
