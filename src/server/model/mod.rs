//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! registry entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.

pub mod admin;
pub mod claim;
pub mod guest;
pub mod item;
pub mod user;
