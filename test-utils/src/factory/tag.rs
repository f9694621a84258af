//! Tag factory for creating test tag rows.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test tags with customizable fields.
///
/// The guild id is required since every tag is scoped to a guild.
pub struct TagFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: i64,
    name: String,
    owner: i64,
    content: String,
    uses: i32,
}

impl<'a> TagFactory<'a> {
    /// Creates a new TagFactory with default values.
    ///
    /// Defaults:
    /// - name: `"tag{id}"`
    /// - owner: auto-incremented unique id
    /// - content: `"Content of tag{id}"`
    /// - uses: `0`
    pub fn new(db: &'a DatabaseConnection, guild_id: i64) -> Self {
        let id = next_id();
        Self {
            db,
            guild_id,
            name: format!("tag{}", id),
            owner: next_id(),
            content: format!("Content of tag{}", id),
            uses: 0,
        }
    }

    /// Sets the tag name. Stored as given, callers pass lowercase names.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn owner(mut self, owner: i64) -> Self {
        self.owner = owner;
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn uses(mut self, uses: i32) -> Self {
        self.uses = uses;
        self
    }

    /// Builds and inserts the tag row into the database.
    pub async fn build(self) -> Result<entity::tag::Model, DbErr> {
        entity::tag::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            tag_name: ActiveValue::Set(self.name),
            tag_owner: ActiveValue::Set(self.owner),
            tag_content: ActiveValue::Set(self.content),
            uses: ActiveValue::Set(self.uses),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a tag with default values in the given guild.
pub async fn create_tag(
    db: &DatabaseConnection,
    guild_id: i64,
) -> Result<entity::tag::Model, DbErr> {
    TagFactory::new(db, guild_id).build().await
}
