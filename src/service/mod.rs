//! Table operations: request validation and execution.

mod executor;
pub mod request;
pub use executor::TableExecutor;
pub use request::{TableOperation, TableRequest};
