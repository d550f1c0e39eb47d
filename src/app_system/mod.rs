//! System orchestration, startup, and shutdown logic.

pub mod shop_system;
pub mod telemetry;
pub mod error;

pub use shop_system::*;
pub use telemetry::*;
pub use error::*;
