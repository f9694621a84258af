//! Ready event handler.
//!
//! Fired after every successful gateway handshake, including reconnects. The guilds
//! listed here are registered in one batch so the per-guild `guild_create` events that
//! follow are served from the cache.

use serenity::all::Ready;

use crate::{service::guild::GuildService, state::Data};

pub async fn handle_ready(data: &Data, ready: &Ready) {
    tracing::info!(
        "{} is connected to Discord ({} guilds)",
        ready.user.name,
        ready.guilds.len()
    );

    let guild_ids: Vec<u64> = ready.guilds.iter().map(|g| g.id.get()).collect();

    if let Err(e) = GuildService::new(&data.db, &data.guilds)
        .ensure_many(&guild_ids)
        .await
    {
        tracing::error!("Failed to register guilds on ready: {}", e);
        return;
    }

    tracing::debug!("{} guilds in cache after ready", data.guilds.len().await);
}
