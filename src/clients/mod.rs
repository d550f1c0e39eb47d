//! Typed handles over the generic resource actors.

#[macro_use]
mod macros;
pub mod catalog_client;

pub use catalog_client::*;
