#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use customer_api::{app, connect, ensure_database_exists, AppState, Environment, SqliteStore, CUSTOMERS_DDL};
use serde_json::Value;
use sqlx::SqlitePool;
use tempfile::TempDir;
use tower::ServiceExt;

pub const BODY_LIMIT: usize = 16 * 1024;

pub struct TestApp {
    pub router: Router,
    pub pool: SqlitePool,
    // Keeps the database directory alive for the test's duration.
    pub dir: TempDir,
}

pub async fn sqlite_app(environment: Environment) -> TestApp {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let path = dir.path().join("Customers.db");
    ensure_database_exists(&path, CUSTOMERS_DDL)
        .await
        .expect("failed to create database");
    let pool = connect(&path, 4).await.expect("failed to open pool");
    let router = app(AppState::new(SqliteStore::new(pool.clone()), environment), BODY_LIMIT);
    TestApp { router, pool, dir }
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("response body was not JSON")
    }

    pub fn text(&self) -> String {
        String::from_utf8(self.body.clone()).expect("response body was not utf-8")
    }
}

pub async fn send(router: &Router, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(v) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(v.to_string())
        }
        None => Body::empty(),
    };
    send_request(router, builder.body(body).expect("failed to build request")).await
}

pub async fn send_request(router: &Router, request: Request<Body>) -> TestResponse {
    let resp = router.clone().oneshot(request).await.expect("request failed");
    let status = resp.status();
    let headers = resp.headers().clone();
    let body = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body")
        .to_vec();
    TestResponse { status, headers, body }
}
