//! Safe SQL builder: identifiers validated against a strict pattern, values as parameters.

mod builder;
pub mod ident;
pub mod params;
pub use builder::*;
pub use ident::{Ident, IdentKind};
pub use params::*;
