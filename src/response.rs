//! Response bodies for `/sqlite`. The status strings are part of the wire contract.

use serde::Serialize;
use serde_json::Value;

pub const STATUS_INSERTED: &str = "Successfully Inserted";
pub const STATUS_UPDATED: &str = "Successfully Updated";
pub const STATUS_NOT_UPDATED: &str = "Nothing was updated.";
pub const STATUS_DELETED: &str = "Successfully Deleted";
pub const STATUS_NOT_FOUND: &str = "Document not found.";

/// Result of one table operation, serialized without a wrapper:
/// an array of rows, `{"Status", "rowid"}`, or `{"Status"}`.
#[derive(Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Outcome {
    Rows(Vec<Value>),
    Inserted {
        #[serde(rename = "Status")]
        status: &'static str,
        rowid: i64,
    },
    Status {
        #[serde(rename = "Status")]
        status: &'static str,
    },
}

impl Outcome {
    pub fn inserted(rowid: i64) -> Self {
        Outcome::Inserted {
            status: STATUS_INSERTED,
            rowid,
        }
    }

    pub fn updated(rows_affected: u64) -> Self {
        let status = if rows_affected > 0 { STATUS_UPDATED } else { STATUS_NOT_UPDATED };
        Outcome::Status { status }
    }

    pub fn deleted(rows_affected: u64) -> Self {
        let status = if rows_affected > 0 { STATUS_DELETED } else { STATUS_NOT_FOUND };
        Outcome::Status { status }
    }
}
