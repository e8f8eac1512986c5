use crate::server::{
    data::item::ItemRepository,
    model::item::{CreateItemParams, ItemUpdate, UpdateItemParams},
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_by_guest;
mod get_claimed;
mod get_unclaimed;
mod get_with_claims;
mod update;
