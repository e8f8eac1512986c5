use sea_orm_migration::{prelude::*, schema::*};

use super::m20251018_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Guest::Table)
                    .if_not_exists()
                    .col(string(Guest::Name))
                    .col(string(Guest::Number))
                    .col(string_null(Guest::UserEmail))
                    .col(boolean(Guest::Going).default(true))
                    .col(
                        timestamp_with_time_zone(Guest::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Guest::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .primary_key(Index::create().col(Guest::Name).col(Guest::Number))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_guests_user_email")
                            .from(Guest::Table, Guest::UserEmail)
                            .to(User::Table, User::Email)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_guests_user_email")
                    .table(Guest::Table)
                    .col(Guest::UserEmail)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Guest::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Guest {
    #[sea_orm(iden = "guests")]
    Table,
    Name,
    Number,
    UserEmail,
    Going,
    CreatedAt,
    UpdatedAt,
}
