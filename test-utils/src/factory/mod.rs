//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories insert directly through SeaORM active models,
//! bypassing the repositories under test.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!     let item = factory::item::create_item(&db).await?;
//!
//!     // Create with all dependencies
//!     let (user, guest, item, claim) =
//!         factory::helpers::create_claim_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let guest = factory::guest::GuestFactory::new(&db)
//!     .name("Ada")
//!     .number("555-0100")
//!     .user_email(&user.email)
//!     .going(false)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `guest` - Create guest entities, optionally owned by a user
//! - `item` - Create registry item entities
//! - `claim` - Create guest/item claims and keep the item counter in step
//! - `helpers` - Unique id generation and dependency chains

pub mod claim;
pub mod guest;
pub mod helpers;
pub mod item;
pub mod user;

pub use claim::create_claim;
pub use guest::{create_guest, create_guest_for_user};
pub use item::{create_item, create_item_with_count};
pub use user::create_user;
