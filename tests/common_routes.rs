mod common;

use axum::http::{Method, StatusCode};
use common::setup;
use serde_json::json;
use sqlite_table_api::{app, ensure_schema, AppError, AppState, Database, TableExecutor, TableRequest};

#[tokio::test]
async fn root_reports_status_and_db_path() {
    let app = setup().await;
    let (status, body) = app.call(Method::GET, "/", None).await;
    assert_eq!(status, StatusCode::OK);
    let expected = app.dir.path().join("theaters.db");
    assert_eq!(body, json!({"Status": "UP", "db_path": expected.display().to_string()}));
}

#[tokio::test]
async fn health_and_ready() {
    let app = setup().await;
    let (status, body) = app.call(Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok"}));

    let (status, body) = app.call(Method::GET, "/ready", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok", "database": "ok"}));

    let (status, body) = app.call(Method::GET, "/version", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"name": "sqlite-table-api", "version": env!("CARGO_PKG_VERSION")})
    );
}

#[tokio::test]
async fn ready_degrades_when_database_unreachable() {
    let dir = tempfile::tempdir().unwrap();
    // Parent directory does not exist and nothing creates it.
    let db = Database::new(dir.path().join("missing").join("theaters.db"));
    let router = app(AppState { db: db.clone() }, 1024);
    let unreachable = common::TestApp { dir, db, router };
    let (status, body) = unreachable.call(Method::GET, "/ready", None).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body, json!({"status": "degraded", "database": "unavailable"}));
}

#[tokio::test]
async fn bootstrap_creates_directory_and_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let db = Database::new(dir.path().join("nested").join("theaters.db"));
    ensure_schema(&db).await.unwrap();
    ensure_schema(&db).await.unwrap();
    assert!(db.path().exists());

    let request = TableRequest::from_body(&Method::GET, &json!({"table": "salas"})).unwrap();
    let outcome = TableExecutor::execute(&db, &request).await.unwrap();
    assert_eq!(serde_json::to_value(outcome).unwrap(), json!([]));
}

#[tokio::test]
async fn bootstrap_reports_directory_failure_as_io() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, b"not a directory").unwrap();
    let db = Database::new(blocker.join("sub").join("theaters.db"));
    let err = ensure_schema(&db).await.unwrap_err();
    assert!(matches!(err, AppError::Io(_)), "{:?}", err);
    assert!(err.to_string().starts_with("io: "), "{}", err);
}

#[tokio::test]
async fn executor_works_on_any_table() {
    let app = setup().await;
    {
        use sqlx::Connection;
        let mut conn = app.db.connect().await.unwrap();
        sqlx::query("CREATE TABLE peliculas (id INTEGER PRIMARY KEY, titulo TEXT, rating REAL, poster BLOB)")
            .execute(&mut conn)
            .await
            .unwrap();
        sqlx::query("INSERT INTO peliculas (titulo, rating, poster) VALUES ('Ran', 8.2, x'0102')")
            .execute(&mut conn)
            .await
            .unwrap();
        conn.close().await.unwrap();
    }

    let request = TableRequest::from_body(
        &Method::GET,
        &json!({"table": "peliculas", "Filter": {"titulo": "Ran"}}),
    )
    .unwrap();
    let outcome = TableExecutor::execute(&app.db, &request).await.unwrap();
    assert_eq!(
        serde_json::to_value(outcome).unwrap(),
        json!([{"id": 1, "titulo": "Ran", "rating": 8.2, "poster": [1, 2]}])
    );
}
