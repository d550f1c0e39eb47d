pub mod product;
pub mod cart;
pub mod receipt;

pub use product::*;
pub use cart::*;
pub use receipt::*;
