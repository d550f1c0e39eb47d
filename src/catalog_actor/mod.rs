//! Catalog-specific domain logic: the stock actions a product accepts.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;
