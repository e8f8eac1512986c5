use sea_orm_migration::{prelude::*, schema::*};

use super::{m20251018_000002_create_guest_table::Guest, m20251018_000003_create_item_table::Item};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GuestItem::Table)
                    .if_not_exists()
                    .col(string(GuestItem::GuestName))
                    .col(string(GuestItem::GuestNumber))
                    .col(string(GuestItem::ItemName))
                    .col(integer(GuestItem::QuantityClaimed).default(1))
                    .col(
                        timestamp_with_time_zone(GuestItem::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(GuestItem::GuestName)
                            .col(GuestItem::GuestNumber)
                            .col(GuestItem::ItemName),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_guest_items_guest")
                            .from_tbl(GuestItem::Table)
                            .from_col(GuestItem::GuestName)
                            .from_col(GuestItem::GuestNumber)
                            .to_tbl(Guest::Table)
                            .to_col(Guest::Name)
                            .to_col(Guest::Number)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_guest_items_item")
                            .from(GuestItem::Table, GuestItem::ItemName)
                            .to(Item::Table, Item::ItemName)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_guest_items_guest")
                    .table(GuestItem::Table)
                    .col(GuestItem::GuestName)
                    .col(GuestItem::GuestNumber)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_guest_items_item")
                    .table(GuestItem::Table)
                    .col(GuestItem::ItemName)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GuestItem::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GuestItem {
    #[sea_orm(iden = "guest_items")]
    Table,
    GuestName,
    GuestNumber,
    ItemName,
    QuantityClaimed,
    CreatedAt,
}
