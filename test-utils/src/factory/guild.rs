//! Guild factory for creating test guild configuration rows.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test guilds with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::guild::GuildFactory;
///
/// let guild = GuildFactory::new(&db)
///     .guild_id(987654321)
///     .prefix("!")
///     .build()
///     .await?;
/// ```
pub struct GuildFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: i64,
    prefix: String,
    star_channel: Option<i64>,
}

impl<'a> GuildFactory<'a> {
    /// Creates a new GuildFactory with default values.
    ///
    /// Defaults:
    /// - guild_id: auto-incremented unique id
    /// - prefix: `"$"`
    /// - star_channel: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            guild_id: next_id(),
            prefix: "$".to_string(),
            star_channel: None,
        }
    }

    pub fn guild_id(mut self, guild_id: i64) -> Self {
        self.guild_id = guild_id;
        self
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn star_channel(mut self, star_channel: Option<i64>) -> Self {
        self.star_channel = star_channel;
        self
    }

    /// Builds and inserts the guild row into the database.
    ///
    /// # Returns
    /// - `Ok(entity::guild::Model)` - Created guild row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::guild::Model, DbErr> {
        entity::guild::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            prefix: ActiveValue::Set(self.prefix),
            star_channel: ActiveValue::Set(self.star_channel),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a guild with default values.
///
/// Shorthand for `GuildFactory::new(db).build().await`.
pub async fn create_guild(db: &DatabaseConnection) -> Result<entity::guild::Model, DbErr> {
    GuildFactory::new(db).build().await
}
