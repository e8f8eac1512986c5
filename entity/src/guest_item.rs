use sea_orm::entity::prelude::*;

/// Junction row recording how many of an item a guest has claimed.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "guest_items")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub guest_name: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub guest_number: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub item_name: String,
    pub quantity_claimed: i32,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::guest::Entity",
        from = "(Column::GuestName, Column::GuestNumber)",
        to = "(super::guest::Column::Name, super::guest::Column::Number)",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Guest,
    #[sea_orm(
        belongs_to = "super::item::Entity",
        from = "Column::ItemName",
        to = "super::item::Column::ItemName",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Item,
}

impl Related<super::guest::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Guest.def()
    }
}

impl Related<super::item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Item.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
