//! Common routes: status probe, health, readiness, version.

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;
use sqlx::Connection;

#[derive(Serialize)]
struct StatusBody {
    #[serde(rename = "Status")]
    status: &'static str,
    db_path: String,
}

/// Liveness and readiness share one shape; `database` only appears once it was checked.
#[derive(Serialize)]
struct Probe {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    database: Option<&'static str>,
}

impl Probe {
    fn alive() -> Self {
        Probe { status: "ok", database: None }
    }

    fn checked(reachable: bool) -> Self {
        if reachable {
            Probe { status: "ok", database: Some("ok") }
        } else {
            Probe { status: "degraded", database: Some("unavailable") }
        }
    }
}

#[derive(Serialize)]
struct Build {
    name: &'static str,
    version: &'static str,
}

async fn status(State(state): State<AppState>) -> Json<StatusBody> {
    Json(StatusBody {
        status: "UP",
        db_path: state.db.path().display().to_string(),
    })
}

async fn health() -> Json<Probe> {
    Json(Probe::alive())
}

/// Open a connection the same way a table operation does and run `SELECT 1`.
async fn ping(state: &AppState) -> Result<(), sqlx::Error> {
    let mut conn = state.db.connect().await?;
    let res = sqlx::query("SELECT 1").fetch_optional(&mut conn).await;
    conn.close().await?;
    res.map(|_| ())
}

async fn ready(State(state): State<AppState>) -> (StatusCode, Json<Probe>) {
    match ping(&state).await {
        Ok(()) => (StatusCode::OK, Json(Probe::checked(true))),
        Err(e) => {
            tracing::warn!(error = %e, path = %state.db.path().display(), "readiness check failed");
            (StatusCode::SERVICE_UNAVAILABLE, Json(Probe::checked(false)))
        }
    }
}

async fn version() -> Json<Build> {
    Json(Build {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// GET /, /health, /ready, /version.
pub fn common_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(status))
        .route("/health", get(health))
        .route("/ready", get(ready))
        .route("/version", get(version))
        .with_state(state)
}
