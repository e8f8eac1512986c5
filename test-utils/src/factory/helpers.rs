//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr, EntityTrait};

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Values increase monotonically across all factories so generated keys
/// (emails, guest names, item names) never collide within a test binary.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a complete claim hierarchy with all dependencies.
///
/// This is a convenience method that creates:
/// 1. User
/// 2. Guest owned by the user
/// 3. Item with a count of 5
/// 4. Claim of 1 on the item by the guest (item counter incremented)
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, guest, item, claim))` - Tuple of all created entities; `item` reflects
///   the counter after the claim
/// - `Err(DbErr)` - Database error during creation
pub async fn create_claim_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::guest::Model,
        entity::item::Model,
        entity::guest_item::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let guest = crate::factory::guest::create_guest_for_user(db, &user.email).await?;
    let item = crate::factory::item::create_item(db).await?;
    let claim = crate::factory::claim::create_claim(db, &guest, &item).await?;

    let item = entity::prelude::Item::find_by_id(item.item_name.clone())
        .one(db)
        .await?
        .ok_or_else(|| DbErr::RecordNotFound(item.item_name.clone()))?;

    Ok((user, guest, item, claim))
}
