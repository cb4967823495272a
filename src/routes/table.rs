//! Table operation route: GET reads, POST inserts, PUT updates, DELETE deletes.

use crate::handlers::table_operation;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn table_routes(state: AppState) -> Router {
    Router::new()
        .route(
            "/sqlite",
            get(table_operation)
                .post(table_operation)
                .put(table_operation)
                .delete(table_operation),
        )
        .with_state(state)
}
