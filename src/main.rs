//! Server: reads settings from the environment, optionally creates the bootstrap tables,
//! and serves the status and `/sqlite` routes.

use sqlite_table_api::{app, ensure_schema, AppState, Database, Settings};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("sqlite_table_api=info,tower_http=info")),
        )
        .init();

    let settings = Settings::from_env()?;
    let db = Database::new(settings.db_path.clone());
    if settings.init_schema {
        ensure_schema(&db).await?;
    }

    let state = AppState { db };
    let router = app(state, settings.body_limit);

    let listener = TcpListener::bind(settings.bind_addr()).await?;
    tracing::info!(db_path = %settings.db_path.display(), "listening on {}", listener.local_addr()?);
    axum::serve(listener, router).await?;
    Ok(())
}
