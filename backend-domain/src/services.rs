// Pure domain services

pub mod points;
pub mod validation;

pub use points::*;
pub use validation::*;
