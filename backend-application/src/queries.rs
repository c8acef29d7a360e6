pub mod points_queries;
pub mod receipt_queries;
