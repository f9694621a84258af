use crate::data::{tag::TagRepository, Database};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod get_and_increment;
mod info;
mod insert;
mod owner;
mod update;

/// Reads the stored use counter of a tag.
async fn uses_of(db: &Database, guild_id: i64, name: &str) -> Result<i32, DbErr> {
    let tag = entity::prelude::Tag::find_by_id((guild_id, name.to_string()))
        .one(db.connection())
        .await?
        .ok_or_else(|| DbErr::RecordNotFound(name.to_string()))?;

    Ok(tag.uses)
}
