//! Session cart and the rules reconciling it with catalog stock.

pub mod error;
pub mod outcome;
pub mod reconciler;

pub use error::*;
pub use outcome::*;
pub use reconciler::*;
