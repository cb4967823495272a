//! HTTP handlers for table operations.

pub mod table;
pub use table::*;
