//! Command implementations.

pub mod dashboard;
pub mod simulate;
pub mod tests;
pub mod validate;
