#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use sqlite_table_api::{app, ensure_schema, AppState, Database};
use tempfile::TempDir;
use tower::ServiceExt;

pub struct TestApp {
    pub dir: TempDir,
    pub db: Database,
    pub router: Router,
}

/// Fresh database file with the bootstrap tables.
pub async fn setup() -> TestApp {
    let dir = tempfile::tempdir().unwrap();
    let db = Database::new(dir.path().join("theaters.db"));
    ensure_schema(&db).await.unwrap();
    let router = app(AppState { db: db.clone() }, 1024 * 1024);
    TestApp { dir, db, router }
}

impl TestApp {
    pub async fn call(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let body = match body {
            Some(v) => Body::from(v.to_string()),
            None => Body::empty(),
        };
        let req = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(body)
            .unwrap();
        self.send(req).await
    }

    pub async fn send(&self, req: Request<Body>) -> (StatusCode, Value) {
        let res = self.router.clone().oneshot(req).await.unwrap();
        let status = res.status();
        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, value)
    }

    pub async fn sqlite(&self, method: Method, body: Value) -> (StatusCode, Value) {
        self.call(method, "/sqlite", Some(body)).await
    }

    /// Rows of `table` through the read operation.
    pub async fn rows(&self, table: &str) -> Vec<Value> {
        let (status, body) = self.sqlite(Method::GET, serde_json::json!({ "table": table })).await;
        assert_eq!(status, StatusCode::OK, "{}", body);
        body.as_array().cloned().unwrap()
    }

    pub async fn insert(&self, table: &str, document: Value) -> i64 {
        let (status, body) = self
            .sqlite(Method::POST, serde_json::json!({ "table": table, "Document": document }))
            .await;
        assert_eq!(status, StatusCode::OK, "{}", body);
        body["rowid"].as_i64().unwrap()
    }
}
