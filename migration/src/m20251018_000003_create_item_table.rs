use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Item::Table)
                    .if_not_exists()
                    .col(string(Item::ItemName).primary_key())
                    .col(text_null(Item::ItemLink))
                    .col(text_null(Item::ItemPhoto))
                    .col(integer(Item::ItemCount).default(1))
                    .col(integer(Item::ClaimedCount).default(0))
                    .col(
                        timestamp_with_time_zone(Item::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Item::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Item::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Item {
    #[sea_orm(iden = "items")]
    Table,
    ItemName,
    ItemLink,
    ItemPhoto,
    ItemCount,
    ClaimedCount,
    CreatedAt,
    UpdatedAt,
}
