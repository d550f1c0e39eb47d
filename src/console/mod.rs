//! Numbered-menu front end. All text parsing happens here; the cart only
//! ever sees validated IDs, quantities, and payment methods.

mod menu;
mod render;
mod terminal;

pub use menu::run_console;
pub use terminal::Terminal;
