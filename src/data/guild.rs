use sea_orm::DbErr;

use crate::{data::Database, model::guild::GuildConfig};

pub struct GuildRepository<'a> {
    db: &'a Database,
}

impl<'a> GuildRepository<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Inserts a guild row with the default prefix unless one already exists.
    ///
    /// # Returns
    /// - `Ok(true)` - Row was created
    /// - `Ok(false)` - Guild was already known
    pub async fn insert_if_missing(&self, guild_id: u64) -> Result<bool, DbErr> {
        let inserted = self
            .db
            .execute(
                "INSERT INTO guilds (guild_id, prefix) VALUES ($1, '$') \
                 ON CONFLICT (guild_id) DO NOTHING",
                vec![(guild_id as i64).into()],
            )
            .await?;

        Ok(inserted > 0)
    }

    /// Inserts every missing guild in one batch. Returns how many rows were created.
    pub async fn insert_many_if_missing(&self, guild_ids: &[u64]) -> Result<u64, DbErr> {
        if guild_ids.is_empty() {
            return Ok(0);
        }

        self.db
            .executemany(
                "INSERT INTO guilds (guild_id, prefix) VALUES ($1, '$') \
                 ON CONFLICT (guild_id) DO NOTHING",
                guild_ids
                    .iter()
                    .map(|id| vec![(*id as i64).into()])
                    .collect(),
            )
            .await
    }

    pub async fn all(&self) -> Result<Vec<GuildConfig>, DbErr> {
        let guilds = self
            .db
            .rows::<entity::guild::Model>(
                "SELECT guild_id, prefix, star_channel FROM guilds",
                vec![],
            )
            .await?;

        Ok(guilds.into_iter().map(GuildConfig::from_entity).collect())
    }

    /// Finds the stored configuration of a guild.
    ///
    /// # Returns
    /// - `Ok(Some(GuildConfig))` - Guild row exists
    /// - `Ok(None)` - Guild has never been seen
    pub async fn find(&self, guild_id: u64) -> Result<Option<GuildConfig>, DbErr> {
        let guild = self
            .db
            .row::<entity::guild::Model>(
                "SELECT guild_id, prefix, star_channel FROM guilds WHERE guild_id = $1",
                vec![(guild_id as i64).into()],
            )
            .await?;

        Ok(guild.map(GuildConfig::from_entity))
    }

    pub async fn prefix(&self, guild_id: u64) -> Result<Option<String>, DbErr> {
        self.db
            .field::<String>(
                "SELECT prefix FROM guilds WHERE guild_id = $1",
                vec![(guild_id as i64).into()],
            )
            .await
    }

    /// Returns the number of updated rows, 0 when the guild has no row.
    pub async fn set_prefix(&self, guild_id: u64, prefix: &str) -> Result<u64, DbErr> {
        self.db
            .execute(
                "UPDATE guilds SET prefix = $1 WHERE guild_id = $2",
                vec![prefix.into(), (guild_id as i64).into()],
            )
            .await
    }

    pub async fn star_channel(&self, guild_id: u64) -> Result<Option<u64>, DbErr> {
        let channel = self
            .db
            .field::<i64>(
                "SELECT star_channel FROM guilds WHERE guild_id = $1",
                vec![(guild_id as i64).into()],
            )
            .await?;

        Ok(channel.map(|id| id as u64))
    }

    pub async fn set_star_channel(&self, guild_id: u64, channel_id: u64) -> Result<u64, DbErr> {
        self.db
            .execute(
                "UPDATE guilds SET star_channel = $1 WHERE guild_id = $2",
                vec![(channel_id as i64).into(), (guild_id as i64).into()],
            )
            .await
    }
}
