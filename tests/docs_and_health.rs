mod common;

use axum::http::{header, Method, StatusCode};
use common::{send, sqlite_app};
use customer_api::routes::{document_path, ROOT_MESSAGE};
use customer_api::Environment;

#[tokio::test]
async fn root_returns_help_text() {
    let t = sqlite_app(Environment::Production).await;
    let resp = send(&t.router, Method::GET, "/", None).await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.text(), ROOT_MESSAGE);
    for path in ["/customers", "/swagger", "/health", "/ready", "/version"] {
        assert!(ROOT_MESSAGE.contains(path), "help text does not mention {}", path);
    }
    assert!(resp
        .headers
        .get(header::CONTENT_TYPE)
        .unwrap()
        .to_str()
        .unwrap()
        .starts_with("text/plain"));
}

#[tokio::test]
async fn openapi_document_describes_customer_routes() {
    let t = sqlite_app(Environment::Production).await;
    assert_eq!(document_path(), "/swagger/CustomerAPI/swagger.json");

    let resp = send(&t.router, Method::GET, &document_path(), None).await;
    assert_eq!(resp.status, StatusCode::OK);
    let doc = resp.json();
    assert_eq!(doc["info"]["version"], "v1");
    assert!(doc["paths"]["/customers"]["get"].is_object());
    assert!(doc["paths"]["/customers"]["post"].is_object());
    assert!(doc["paths"]["/customers/{id}"]["put"].is_object());
    assert!(doc["paths"]["/customers/{id}"]["delete"].is_object());
    assert!(doc["paths"].get("/customers/withsecrets").is_none());
}

#[tokio::test]
async fn swagger_page_points_at_document() {
    let t = sqlite_app(Environment::Development).await;
    let resp = send(&t.router, Method::GET, "/swagger", None).await;
    assert_eq!(resp.status, StatusCode::OK);
    let page = resp.text();
    assert!(page.contains(&document_path()));
    assert!(page.contains(r##"dom_id: "#swagger-ui""##));

    let doc = send(&t.router, Method::GET, &document_path(), None).await.json();
    assert!(doc["paths"]["/customers/withsecrets"]["get"].is_object());
}

#[tokio::test]
async fn health_ready_and_version() {
    let t = sqlite_app(Environment::Production).await;
    let health = send(&t.router, Method::GET, "/health", None).await;
    assert_eq!(health.json(), serde_json::json!({"status": "ok"}));

    let ready = send(&t.router, Method::GET, "/ready", None).await;
    assert_eq!(ready.status, StatusCode::OK);
    assert_eq!(ready.json()["database"], "ok");

    let version = send(&t.router, Method::GET, "/version", None).await.json();
    assert_eq!(version["name"], "customer-api");

    t.pool.close().await;
    let ready = send(&t.router, Method::GET, "/ready", None).await;
    assert_eq!(ready.status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(ready.json()["status"], "degraded");
}
