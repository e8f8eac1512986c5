//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Validation**: Rules that need the database, such as owner existence and item availability
//! - **Not-found detection**: Turning absent rows into `AppError::NotFound`
//! - **Constraint mapping**: Reporting duplicate keys and dangling references with resource-specific messages
//! - **Password hashing**: Passwords never reach a repository in plaintext

pub mod admin;
pub mod claim;
pub mod guest;
pub mod item;
pub mod user;

#[cfg(test)]
mod test;
