//! Turns the untyped `/sqlite` body into one typed operation per HTTP verb.

use crate::error::AppError;
use crate::sql::{ColumnValues, Ident, IdentKind};
use axum::http::Method;
use serde_json::{Map, Value};

pub const TABLE_FIELD: &str = "table";
pub const FILTER_FIELD: &str = "Filter";
pub const DOCUMENT_FIELD: &str = "Document";
pub const UPDATE_FIELD: &str = "DataToBeUpdated";

#[derive(Clone, Debug, PartialEq)]
pub enum TableOperation {
    Read { filter: ColumnValues },
    Write { document: ColumnValues },
    Update { filter: ColumnValues, set: ColumnValues },
    Delete { filter: ColumnValues },
}

impl TableOperation {
    pub fn name(&self) -> &'static str {
        match self {
            TableOperation::Read { .. } => "read",
            TableOperation::Write { .. } => "write",
            TableOperation::Update { .. } => "update",
            TableOperation::Delete { .. } => "delete",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TableRequest {
    pub table: Ident,
    pub operation: TableOperation,
}

impl TableRequest {
    /// Validate the body for `method`. Non-object bodies are treated as `{}`.
    pub fn from_body(method: &Method, body: &Value) -> Result<Self, AppError> {
        let empty = Map::new();
        let obj = body.as_object().unwrap_or(&empty);
        let table = table_name(obj)?;
        let operation = if *method == Method::GET {
            TableOperation::Read {
                filter: optional_mapping(obj, FILTER_FIELD)?,
            }
        } else if *method == Method::POST {
            TableOperation::Write {
                document: required_mapping(obj, DOCUMENT_FIELD)?,
            }
        } else if *method == Method::PUT {
            let filter = required_mapping(obj, FILTER_FIELD)?;
            let set = required_mapping(obj, UPDATE_FIELD)?;
            TableOperation::Update { filter, set }
        } else if *method == Method::DELETE {
            TableOperation::Delete {
                filter: required_mapping(obj, FILTER_FIELD)?,
            }
        } else {
            return Err(AppError::Validation(format!("unsupported method {}", method)));
        };
        Ok(TableRequest { table, operation })
    }
}

fn table_name(obj: &Map<String, Value>) -> Result<Ident, AppError> {
    match obj.get(TABLE_FIELD) {
        None | Some(Value::Null) => Err(missing(TABLE_FIELD)),
        Some(Value::String(s)) if s.is_empty() => Err(missing(TABLE_FIELD)),
        Some(Value::String(s)) => Ident::parse(IdentKind::Table, s),
        Some(_) => Err(AppError::Validation(format!("'{}' must be a string", TABLE_FIELD))),
    }
}

/// Absent or null means no filter; anything other than an object is rejected.
fn optional_mapping(obj: &Map<String, Value>, field: &str) -> Result<ColumnValues, AppError> {
    match obj.get(field) {
        None | Some(Value::Null) => Ok(ColumnValues::new()),
        Some(Value::Object(m)) => ColumnValues::from_object(m),
        Some(_) => Err(AppError::Validation(format!("'{}' must be an object", field))),
    }
}

/// Must be a non-empty object.
fn required_mapping(obj: &Map<String, Value>, field: &str) -> Result<ColumnValues, AppError> {
    match obj.get(field) {
        Some(Value::Object(m)) if !m.is_empty() => ColumnValues::from_object(m),
        _ => Err(missing(field)),
    }
}

fn missing(field: &str) -> AppError {
    AppError::Validation(format!("missing '{}'", field))
}
