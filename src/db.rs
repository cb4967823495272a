//! SQLite database handle. Holds connect options only; every operation opens its own connection.

use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use sqlx::ConnectOptions;
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Clone, Debug)]
pub struct Database {
    path: Arc<PathBuf>,
    options: SqliteConnectOptions,
}

impl Database {
    /// Foreign keys are enforced on every connection; the file is created if missing.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let options = SqliteConnectOptions::new()
            .filename(&path)
            .foreign_keys(true)
            .create_if_missing(true);
        Database {
            path: Arc::new(path),
            options,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open a fresh connection. Callers close it before returning.
    pub async fn connect(&self) -> Result<SqliteConnection, sqlx::Error> {
        tracing::trace!(path = %self.path.display(), "opening connection");
        self.options.connect().await
    }
}
