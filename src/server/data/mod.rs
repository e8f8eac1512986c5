//! Database repository layer for all registry entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//! Operations that touch an item's `claimed_count` run inside a transaction and roll back
//! explicitly on failure.

pub mod admin;
pub mod claim;
pub mod guest;
pub mod item;
pub mod user;

#[cfg(test)]
mod test;
