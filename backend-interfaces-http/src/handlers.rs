pub mod ops_handlers;
pub mod receipt_handlers;

pub use ops_handlers::*;
pub use receipt_handlers::*;
