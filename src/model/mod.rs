//! Request and response DTOs shared by the HTTP layer.
//!
//! These types define the JSON wire contract. Server-side domain models convert
//! into them at the controller boundary.

pub mod admin;
pub mod api;
pub mod claim;
pub mod guest;
pub mod item;
pub mod user;
