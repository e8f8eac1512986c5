pub use sea_orm_migration::prelude::*;

mod m20251018_000001_create_user_table;
mod m20251018_000002_create_guest_table;
mod m20251018_000003_create_item_table;
mod m20251018_000004_create_guest_item_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251018_000001_create_user_table::Migration),
            Box::new(m20251018_000002_create_guest_table::Migration),
            Box::new(m20251018_000003_create_item_table::Migration),
            Box::new(m20251018_000004_create_guest_item_table::Migration),
        ]
    }
}
