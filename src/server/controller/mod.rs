//! HTTP request handlers.
//!
//! One module per REST resource. Handlers extract path and body, convert request DTOs
//! into service parameters, call the service, and wrap the result in the
//! `ApiResponse` envelope. Every handler carries a `utoipa::path` annotation that the
//! router collects into the OpenAPI document.

pub mod admin;
pub mod claim;
pub mod guest;
pub mod item;
pub mod system;
pub mod user;
