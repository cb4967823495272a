//! Convert serde_json::Value to types that sqlx can bind against SQLite.

use crate::error::AppError;
use crate::sql::ident::{Ident, IdentKind};
use serde_json::{Map, Value};
use sqlx::encode::{Encode, IsNull};
use sqlx::sqlite::{Sqlite, SqliteTypeInfo};
use sqlx::Database;

/// A scalar that can be bound to a SQLite statement. Converts from serde_json::Value.
#[derive(Clone, Debug, PartialEq)]
pub enum SqlValue {
    Null,
    Bool(bool),
    Integer(i64),
    Real(f64),
    Text(String),
}

impl SqlValue {
    /// Arrays and objects are rejected: filters, documents and update sets hold scalars only.
    pub fn from_json(column: &str, v: &Value) -> Result<Self, AppError> {
        Ok(match v {
            Value::Null => SqlValue::Null,
            Value::Bool(b) => SqlValue::Bool(*b),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    SqlValue::Integer(i)
                } else if n.is_u64() {
                    // Above i64::MAX: no SQLite INTEGER holds it, and REAL would round it.
                    return Err(AppError::Validation(format!(
                        "integer out of range for column '{}'",
                        column
                    )));
                } else if let Some(f) = n.as_f64() {
                    SqlValue::Real(f)
                } else {
                    return Err(AppError::Validation(format!(
                        "unsupported number for column '{}'",
                        column
                    )));
                }
            }
            Value::String(s) => SqlValue::Text(s.clone()),
            Value::Array(_) | Value::Object(_) => {
                return Err(AppError::Validation(format!(
                    "value for column '{}' must be a scalar",
                    column
                )))
            }
        })
    }
}

impl<'q> Encode<'q, Sqlite> for SqlValue {
    fn encode_by_ref(
        &self,
        buf: &mut <Sqlite as Database>::ArgumentBuffer<'q>,
    ) -> Result<IsNull, Box<dyn std::error::Error + Send + Sync>> {
        Ok(match self {
            SqlValue::Null => IsNull::Yes,
            SqlValue::Bool(b) => <bool as Encode<Sqlite>>::encode_by_ref(b, buf)?,
            SqlValue::Integer(n) => <i64 as Encode<Sqlite>>::encode_by_ref(n, buf)?,
            SqlValue::Real(n) => <f64 as Encode<Sqlite>>::encode_by_ref(n, buf)?,
            SqlValue::Text(s) => <String as Encode<Sqlite>>::encode_by_ref(s, buf)?,
        })
    }
}

impl sqlx::Type<Sqlite> for SqlValue {
    fn type_info() -> SqliteTypeInfo {
        <String as sqlx::Type<Sqlite>>::type_info()
    }

    fn compatible(_ty: &SqliteTypeInfo) -> bool {
        true
    }
}

/// Ordered column/value pairs taken from a request object (Filter, Document, DataToBeUpdated).
/// Order follows the keys as the client wrote them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ColumnValues(Vec<(Ident, SqlValue)>);

impl ColumnValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_object(map: &Map<String, Value>) -> Result<Self, AppError> {
        let mut out = Vec::with_capacity(map.len());
        for (k, v) in map {
            let col = Ident::parse(IdentKind::Column, k)?;
            let val = SqlValue::from_json(k, v)?;
            out.push((col, val));
        }
        Ok(ColumnValues(out))
    }

    pub fn push(&mut self, column: Ident, value: SqlValue) {
        self.0.push((column, value));
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn columns(&self) -> impl Iterator<Item = &Ident> {
        self.0.iter().map(|(c, _)| c)
    }

    pub fn values(&self) -> impl Iterator<Item = &SqlValue> {
        self.0.iter().map(|(_, v)| v)
    }
}
