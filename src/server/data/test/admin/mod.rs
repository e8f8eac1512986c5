use crate::server::data::admin::AdminRepository;
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

mod columns;
mod migration_status;
mod status;
