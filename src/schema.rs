//! Bootstrap DDL for the `cinemas` and `salas` tables. Idempotent (IF NOT EXISTS).

use crate::db::Database;
use crate::error::AppError;
use sqlx::Connection;

const CINEMAS_DDL: &str = r#"
    CREATE TABLE IF NOT EXISTS cinemas (
        id INTEGER PRIMARY KEY,
        nombre TEXT NOT NULL,
        ciudad TEXT,
        distrito TEXT,
        nro_salas INTEGER DEFAULT 0
    )
"#;

const SALAS_DDL: &str = r#"
    CREATE TABLE IF NOT EXISTS salas (
        id INTEGER PRIMARY KEY,
        cine_id INTEGER NOT NULL,
        numero INTEGER NOT NULL,
        capacidad INTEGER,
        tipo_sala TEXT,
        CONSTRAINT uq_sala_cine_numero UNIQUE (cine_id, numero),
        FOREIGN KEY (cine_id) REFERENCES cinemas(id) ON DELETE CASCADE
    )
"#;

/// Create the database file's directory if needed, then both tables in one transaction.
pub async fn ensure_schema(db: &Database) -> Result<(), AppError> {
    if let Some(dir) = db.path().parent().filter(|d| !d.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(dir).await?;
    }
    let mut conn = db.connect().await?;
    let mut tx = conn.begin().await?;
    sqlx::query(CINEMAS_DDL).execute(&mut *tx).await?;
    sqlx::query(SALAS_DDL).execute(&mut *tx).await?;
    tx.commit().await?;
    conn.close().await?;
    tracing::info!(path = %db.path().display(), "bootstrap schema ready");
    Ok(())
}
