//! Executes one table operation on its own SQLite connection.

use crate::db::Database;
use crate::error::AppError;
use crate::response::Outcome;
use crate::service::request::{TableOperation, TableRequest};
use crate::sql::{delete, insert, select, update, ColumnValues, Ident, QueryBuf};
use serde_json::{Map, Number, Value};
use sqlx::sqlite::{SqliteConnection, SqliteQueryResult, SqliteRow};
use sqlx::Connection;

pub struct TableExecutor;

impl TableExecutor {
    /// Open a connection, run the operation, close the connection on every path.
    pub async fn execute(db: &Database, request: &TableRequest) -> Result<Outcome, AppError> {
        let mut conn = db.connect().await?;
        let outcome = Self::run(&mut conn, request).await;
        if let Err(e) = conn.close().await {
            tracing::warn!(error = %e, "closing connection failed");
        }
        outcome
    }

    async fn run(conn: &mut SqliteConnection, request: &TableRequest) -> Result<Outcome, AppError> {
        let table = &request.table;
        tracing::debug!(table = %table, operation = request.operation.name(), "table operation");
        match &request.operation {
            TableOperation::Read { filter } => Self::read(conn, table, filter).await,
            TableOperation::Write { document } => Self::write(conn, table, document).await,
            TableOperation::Update { filter, set } => Self::update(conn, table, filter, set).await,
            TableOperation::Delete { filter } => Self::delete(conn, table, filter).await,
        }
    }

    /// All rows matching the filter (every row when the filter is empty).
    pub async fn read(
        conn: &mut SqliteConnection,
        table: &Ident,
        filter: &ColumnValues,
    ) -> Result<Outcome, AppError> {
        let q = select(table, filter);
        let rows = Self::query_many(conn, &q).await?;
        Ok(Outcome::Rows(rows))
    }

    /// Insert one row and report its rowid.
    pub async fn write(
        conn: &mut SqliteConnection,
        table: &Ident,
        document: &ColumnValues,
    ) -> Result<Outcome, AppError> {
        let q = insert(table, document);
        let result = Self::execute_committed(conn, &q).await?;
        Ok(Outcome::inserted(result.last_insert_rowid()))
    }

    pub async fn update(
        conn: &mut SqliteConnection,
        table: &Ident,
        filter: &ColumnValues,
        set: &ColumnValues,
    ) -> Result<Outcome, AppError> {
        let q = update(table, set, filter);
        let result = Self::execute_committed(conn, &q).await?;
        Ok(Outcome::updated(result.rows_affected()))
    }

    pub async fn delete(
        conn: &mut SqliteConnection,
        table: &Ident,
        filter: &ColumnValues,
    ) -> Result<Outcome, AppError> {
        let q = delete(table, filter);
        let result = Self::execute_committed(conn, &q).await?;
        Ok(Outcome::deleted(result.rows_affected()))
    }

    async fn query_many(conn: &mut SqliteConnection, q: &QueryBuf) -> Result<Vec<Value>, AppError> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let mut query = sqlx::query(&q.sql);
        for p in &q.params {
            query = query.bind(p.clone());
        }
        let rows = query.fetch_all(&mut *conn).await?;
        Ok(rows.iter().map(row_to_json).collect())
    }

    async fn execute_committed(
        conn: &mut SqliteConnection,
        q: &QueryBuf,
    ) -> Result<SqliteQueryResult, AppError> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query (tx)");
        let mut tx = conn.begin().await?;
        let mut query = sqlx::query(&q.sql);
        for p in &q.params {
            query = query.bind(p.clone());
        }
        let result = query.execute(&mut *tx).await?;
        tx.commit().await?;
        Ok(result)
    }
}

/// Row as a JSON object in result-set column order.
fn row_to_json(row: &SqliteRow) -> Value {
    use sqlx::Column;
    use sqlx::Row;
    let mut map = Map::new();
    for col in row.columns() {
        map.insert(col.name().to_string(), cell_to_value(row, col.ordinal()));
    }
    Value::Object(map)
}

/// Decodes by the value's storage class: INTEGER, REAL, TEXT, BLOB, else null.
fn cell_to_value(row: &SqliteRow, idx: usize) -> Value {
    use sqlx::Row;
    if let Ok(Some(n)) = row.try_get::<Option<i64>, _>(idx) {
        return Value::Number(n.into());
    }
    if let Ok(Some(f)) = row.try_get::<Option<f64>, _>(idx) {
        if let Some(n) = Number::from_f64(f) {
            return Value::Number(n);
        }
    }
    if let Ok(Some(s)) = row.try_get::<Option<String>, _>(idx) {
        return Value::String(s);
    }
    if let Ok(Some(bytes)) = row.try_get::<Option<Vec<u8>>, _>(idx) {
        return Value::Array(bytes.into_iter().map(|b| Value::Number(b.into())).collect());
    }
    Value::Null
}
