//! Guild availability handler.
//!
//! `guild_create` fires on startup for each guild the bot is in, when the bot joins a new
//! guild and when a guild becomes available again after an outage. Guilds are never
//! removed when the bot leaves them.

use serenity::all::Guild;

use crate::{service::guild::GuildService, state::Data};

pub async fn handle_guild_create(data: &Data, guild: &Guild, is_new: Option<bool>) {
    let guild_id = guild.id.get();

    tracing::debug!(
        "Guild create event: {} ({}) - new: {:?}",
        guild.name,
        guild_id,
        is_new
    );

    if let Err(e) = GuildService::new(&data.db, &data.guilds)
        .ensure(guild_id)
        .await
    {
        tracing::error!(
            "Failed to register guild {} ({}): {}",
            guild_id,
            guild.name,
            e
        );
    }
}
