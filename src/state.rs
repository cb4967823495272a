//! Shared application state for all routes.

use crate::db::Database;

#[derive(Clone)]
pub struct AppState {
    /// Connect options only; no connection is held between requests.
    pub db: Database,
}
