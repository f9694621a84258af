//! In-memory guild configuration cache.
//!
//! Filled from the store at startup and on guild-available events, then read on every
//! message to resolve the prefix. Writes made through `GuildService` update the cache
//! after the store; changes made to the store from outside the bot are not picked up.

use std::{collections::HashMap, sync::Arc};

use tokio::sync::RwLock;

use crate::model::guild::GuildConfig;

#[derive(Clone, Default)]
pub struct GuildCache {
    guilds: Arc<RwLock<HashMap<u64, GuildConfig>>>,
}

impl GuildCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self, guild_id: u64) -> Option<GuildConfig> {
        self.guilds.read().await.get(&guild_id).cloned()
    }

    pub async fn prefix(&self, guild_id: u64) -> Option<String> {
        self.guilds
            .read()
            .await
            .get(&guild_id)
            .map(|guild| guild.prefix.clone())
    }

    pub async fn contains(&self, guild_id: u64) -> bool {
        self.guilds.read().await.contains_key(&guild_id)
    }

    pub async fn insert(&self, guild: GuildConfig) {
        self.guilds.write().await.insert(guild.guild_id, guild);
    }

    /// Replaces the whole cache with the given guilds.
    pub async fn replace_all(&self, guilds: Vec<GuildConfig>) {
        let mut map = self.guilds.write().await;
        map.clear();
        map.extend(guilds.into_iter().map(|g| (g.guild_id, g)));
    }

    pub async fn set_prefix(&self, guild_id: u64, prefix: &str) {
        self.guilds
            .write()
            .await
            .entry(guild_id)
            .or_insert_with(|| GuildConfig::with_defaults(guild_id))
            .prefix = prefix.to_string();
    }

    pub async fn set_star_channel(&self, guild_id: u64, channel_id: u64) {
        self.guilds
            .write()
            .await
            .entry(guild_id)
            .or_insert_with(|| GuildConfig::with_defaults(guild_id))
            .star_channel = Some(channel_id);
    }

    pub async fn len(&self) -> usize {
        self.guilds.read().await.len()
    }
}
