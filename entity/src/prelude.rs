pub use super::guest::Entity as Guest;
pub use super::guest_item::Entity as GuestItem;
pub use super::item::Entity as Item;
pub use super::user::Entity as User;
