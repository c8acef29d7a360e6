// Domain entities

pub mod receipt;
pub mod receipt_payload;
pub mod runtime_config;

pub use receipt::*;
pub use receipt_payload::*;
pub use runtime_config::*;
