//! Starboard factory for creating test starboard entries.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating starboard entries with customizable fields.
pub struct StarboardFactory<'a> {
    db: &'a DatabaseConnection,
    base_message_id: i64,
    guild_id: i64,
    stars: i32,
    star_message_id: Option<i64>,
}

impl<'a> StarboardFactory<'a> {
    /// Creates a new StarboardFactory for a message in the given guild with one star.
    pub fn new(db: &'a DatabaseConnection, guild_id: i64) -> Self {
        Self {
            db,
            base_message_id: next_id(),
            guild_id,
            stars: 1,
            star_message_id: None,
        }
    }

    pub fn base_message_id(mut self, base_message_id: i64) -> Self {
        self.base_message_id = base_message_id;
        self
    }

    pub fn stars(mut self, stars: i32) -> Self {
        self.stars = stars;
        self
    }

    pub fn star_message_id(mut self, star_message_id: Option<i64>) -> Self {
        self.star_message_id = star_message_id;
        self
    }

    /// Builds and inserts the starboard entry into the database.
    pub async fn build(self) -> Result<entity::starboard::Model, DbErr> {
        entity::starboard::ActiveModel {
            base_message_id: ActiveValue::Set(self.base_message_id),
            guild_id: ActiveValue::Set(self.guild_id),
            stars: ActiveValue::Set(self.stars),
            star_message_id: ActiveValue::Set(self.star_message_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a starboard entry with default values in the given guild.
pub async fn create_starboard_entry(
    db: &DatabaseConnection,
    guild_id: i64,
) -> Result<entity::starboard::Model, DbErr> {
    StarboardFactory::new(db, guild_id).build().await
}
