//! Test fixtures providing reusable test data without database insertion.
//!
//! Fixtures build entity models in memory. Use them to unit test conversions and
//! business rules without database overhead; use `factory` when rows must exist.

pub mod guest;
pub mod item;
pub mod user;
