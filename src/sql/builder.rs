//! Builds parameterized SELECT, INSERT, UPDATE, DELETE for a client-named table.
//! Identifiers are validated [`Ident`]s; every value is a `?` placeholder.

use crate::sql::ident::Ident;
use crate::sql::params::{ColumnValues, SqlValue};

#[derive(Debug, Default)]
pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<SqlValue>,
}

impl QueryBuf {
    fn new() -> Self {
        Self::default()
    }

    fn push_param(&mut self, v: &SqlValue) -> &'static str {
        self.params.push(v.clone());
        "?"
    }

    fn append(&mut self, other: QueryBuf) {
        self.sql.push_str(&other.sql);
        self.params.extend(other.params);
    }
}

/// `" WHERE a = ? AND b = ?"` in filter order, with values in the same order.
/// An empty filter yields empty text and no params.
pub fn build_filter_clause(filter: &ColumnValues) -> QueryBuf {
    let mut q = QueryBuf::new();
    if filter.is_empty() {
        return q;
    }
    let mut parts = Vec::with_capacity(filter.len());
    for (col, val) in filter.columns().zip(filter.values()) {
        let ph = q.push_param(val);
        parts.push(format!("{} = {}", col, ph));
    }
    q.sql = format!(" WHERE {}", parts.join(" AND "));
    q
}

/// SELECT * with optional equality filter.
pub fn select(table: &Ident, filter: &ColumnValues) -> QueryBuf {
    let mut q = QueryBuf::new();
    q.sql = format!("SELECT * FROM {}", table);
    q.append(build_filter_clause(filter));
    q
}

/// INSERT one row; columns and placeholders in document order.
pub fn insert(table: &Ident, document: &ColumnValues) -> QueryBuf {
    let mut q = QueryBuf::new();
    let cols: Vec<String> = document.columns().map(|c| c.to_string()).collect();
    let placeholders: Vec<&str> = document.values().map(|v| q.push_param(v)).collect();
    q.sql = format!(
        "INSERT INTO {} ({}) VALUES ({})",
        table,
        cols.join(", "),
        placeholders.join(", ")
    );
    q
}

/// UPDATE: SET params first, then filter params.
pub fn update(table: &Ident, set: &ColumnValues, filter: &ColumnValues) -> QueryBuf {
    let mut q = QueryBuf::new();
    let mut sets = Vec::with_capacity(set.len());
    for (col, val) in set.columns().zip(set.values()) {
        let ph = q.push_param(val);
        sets.push(format!("{} = {}", col, ph));
    }
    q.sql = format!("UPDATE {} SET {}", table, sets.join(", "));
    q.append(build_filter_clause(filter));
    q
}

pub fn delete(table: &Ident, filter: &ColumnValues) -> QueryBuf {
    let mut q = QueryBuf::new();
    q.sql = format!("DELETE FROM {}", table);
    q.append(build_filter_clause(filter));
    q
}
