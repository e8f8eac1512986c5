//! SeaORM entities for the registry schema.

pub mod prelude;

pub mod guest;
pub mod guest_item;
pub mod item;
pub mod user;
