//! Generic CRUD over SQLite tables, driven by a JSON request body.

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod response;
pub mod routes;
pub mod schema;
pub mod service;
pub mod sql;
pub mod state;

pub use config::Settings;
pub use db::Database;
pub use error::{AppError, ConfigError};
pub use response::Outcome;
pub use routes::{app, common_routes, table_routes};
pub use schema::ensure_schema;
pub use service::{TableExecutor, TableOperation, TableRequest};
pub use state::AppState;
