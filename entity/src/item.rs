use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "items")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub item_name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub item_link: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub item_photo: Option<String>,
    pub item_count: i32,
    pub claimed_count: i32,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::guest_item::Entity")]
    GuestItem,
}

impl Related<super::guest_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GuestItem.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
