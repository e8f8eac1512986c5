use crate::server::{
    data::claim::ClaimRepository,
    model::claim::{ClaimOutcome, ClaimParams},
};
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod concurrent;
mod delete_by_guest;
mod delete_by_item;
mod find;
mod get_by_item;
mod unclaim;

/// Reads an item's stored claimed counter.
async fn claimed_count(db: &DatabaseConnection, item_name: &str) -> Result<i32, DbErr> {
    let item = entity::prelude::Item::find_by_id(item_name.to_string())
        .one(db)
        .await?
        .ok_or_else(|| DbErr::RecordNotFound(item_name.to_string()))?;

    Ok(item.claimed_count)
}

fn params(
    guest: &entity::guest::Model,
    item: &entity::item::Model,
    quantity: i32,
) -> ClaimParams {
    ClaimParams {
        guest_name: guest.name.clone(),
        guest_number: guest.number.clone(),
        item_name: item.item_name.clone(),
        quantity,
    }
}
