//! `/sqlite` handler: one table operation per request, chosen by HTTP verb.

use crate::error::AppError;
use crate::response::Outcome;
use crate::service::{TableExecutor, TableRequest};
use crate::state::AppState;
use axum::{body::Bytes, extract::State, http::Method, Json};
use serde_json::Value;

/// The body is read as raw bytes: a missing or malformed body is treated as `{}` and
/// rejected by request validation rather than by the JSON extractor.
pub async fn table_operation(
    State(state): State<AppState>,
    method: Method,
    body: Bytes,
) -> Result<Json<Outcome>, AppError> {
    let body: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    let request = TableRequest::from_body(&method, &body)?;
    let outcome = TableExecutor::execute(&state.db, &request).await?;
    Ok(Json(outcome))
}
