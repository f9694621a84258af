use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "starboard")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub base_message_id: i64,
    pub guild_id: i64,
    pub stars: i32,
    /// Message posted in the guild's star channel, once one exists.
    pub star_message_id: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
