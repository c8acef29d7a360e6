pub mod in_memory_receipts;

pub use in_memory_receipts::*;
