use crate::{
    cache::GuildCache,
    data::{Database, GuildRepository},
    error::AppError,
    model::guild::{GuildConfig, PrefixUpdate, DEFAULT_PREFIX, MAX_PREFIX_LEN},
};

pub struct GuildService<'a> {
    db: &'a Database,
    cache: &'a GuildCache,
}

impl<'a> GuildService<'a> {
    pub fn new(db: &'a Database, cache: &'a GuildCache) -> Self {
        Self { db, cache }
    }

    /// Replaces the cache with every guild in the store.
    ///
    /// # Returns
    /// - `Ok(count)` - Number of guilds cached
    pub async fn load(&self) -> Result<usize, AppError> {
        let guilds = GuildRepository::new(self.db).all().await?;
        let count = guilds.len();

        self.cache.replace_all(guilds).await;

        tracing::debug!("Loaded {} guilds into cache", count);

        Ok(count)
    }

    /// Makes sure a guild has a row and a cache entry.
    ///
    /// Called whenever a guild becomes available. A guild already in the cache is
    /// skipped without a store round trip.
    pub async fn ensure(&self, guild_id: u64) -> Result<(), AppError> {
        if self.cache.contains(guild_id).await {
            return Ok(());
        }

        let repo = GuildRepository::new(self.db);

        if repo.insert_if_missing(guild_id).await? {
            tracing::info!("Registered new guild {}", guild_id);
        }

        let guild = repo
            .find(guild_id)
            .await?
            .unwrap_or_else(|| GuildConfig::with_defaults(guild_id));
        self.cache.insert(guild).await;

        Ok(())
    }

    /// Batch variant of `ensure` used when the gateway reports all guilds at once.
    pub async fn ensure_many(&self, guild_ids: &[u64]) -> Result<(), AppError> {
        let created = GuildRepository::new(self.db)
            .insert_many_if_missing(guild_ids)
            .await?;

        if created > 0 {
            tracing::info!("Registered {} new guilds", created);
            self.load().await?;
        }

        Ok(())
    }

    /// Resolves the prefix for a message, `None` meaning a direct message.
    ///
    /// Reads through the cache to the store and falls back to the default prefix.
    pub async fn prefix(&self, guild_id: Option<u64>) -> Result<String, AppError> {
        let Some(guild_id) = guild_id else {
            return Ok(DEFAULT_PREFIX.to_string());
        };

        if let Some(prefix) = self.cache.prefix(guild_id).await {
            return Ok(prefix);
        }

        match GuildRepository::new(self.db).find(guild_id).await? {
            Some(guild) => {
                let prefix = guild.prefix.clone();
                self.cache.insert(guild).await;
                Ok(prefix)
            }
            None => Ok(DEFAULT_PREFIX.to_string()),
        }
    }

    /// Reads a guild's prefix from the store, bypassing the cache.
    ///
    /// Guilds without a row use the default prefix.
    pub async fn stored_prefix(&self, guild_id: u64) -> Result<String, AppError> {
        let prefix = GuildRepository::new(self.db).prefix(guild_id).await?;

        Ok(prefix.unwrap_or_else(|| DEFAULT_PREFIX.to_string()))
    }

    /// Changes a guild's prefix in the store and the cache.
    ///
    /// Prefixes longer than `MAX_PREFIX_LEN` characters or made only of whitespace are
    /// rejected before anything is written.
    pub async fn set_prefix(&self, guild_id: u64, prefix: &str) -> Result<PrefixUpdate, AppError> {
        let prefix = prefix.trim();

        if prefix.is_empty() {
            return Ok(PrefixUpdate::Empty);
        }
        if prefix.chars().count() > MAX_PREFIX_LEN {
            return Ok(PrefixUpdate::TooLong);
        }

        let repo = GuildRepository::new(self.db);
        repo.insert_if_missing(guild_id).await?;
        repo.set_prefix(guild_id, prefix).await?;

        self.cache.set_prefix(guild_id, prefix).await;

        tracing::debug!("Guild {} prefix set to {:?}", guild_id, prefix);

        Ok(PrefixUpdate::Updated(prefix.to_string()))
    }

    /// Star channel of a guild, preferring the cached value.
    pub async fn star_channel(&self, guild_id: u64) -> Result<Option<u64>, AppError> {
        if let Some(guild) = self.cache.get(guild_id).await {
            return Ok(guild.star_channel);
        }

        Ok(GuildRepository::new(self.db).star_channel(guild_id).await?)
    }

    pub async fn set_star_channel(&self, guild_id: u64, channel_id: u64) -> Result<(), AppError> {
        let repo = GuildRepository::new(self.db);
        repo.insert_if_missing(guild_id).await?;
        repo.set_star_channel(guild_id, channel_id).await?;

        self.cache.set_star_channel(guild_id, channel_id).await;

        Ok(())
    }
}
