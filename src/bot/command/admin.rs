use crate::{
    bot::Context, error::AppError, model::guild::PrefixUpdate, service::guild::GuildService,
};

/// View or change the command prefix of this server.
#[poise::command(
    prefix_command,
    slash_command,
    guild_only,
    required_permissions = "ADMINISTRATOR | MANAGE_GUILD"
)]
pub async fn prefix(
    ctx: Context<'_>,
    #[description = "New prefix, up to 3 characters"] new: Option<String>,
) -> Result<(), AppError> {
    let Some(guild_id) = ctx.guild_id() else {
        return Ok(());
    };

    let data = ctx.data();
    let service = GuildService::new(&data.db, &data.guilds);

    let Some(new) = new else {
        let current = service.stored_prefix(guild_id.get()).await?;
        ctx.say(format!("The current prefix is `{}`.", current))
            .await?;
        return Ok(());
    };

    let reply = match service.set_prefix(guild_id.get(), &new).await? {
        PrefixUpdate::Updated(prefix) => {
            tracing::info!("Guild {} changed prefix to {:?}", guild_id, prefix);
            format!("Prefix successfully updated to: `{}`", prefix)
        }
        PrefixUpdate::TooLong => "The prefix can have a max of 3 characters.".to_string(),
        PrefixUpdate::Empty => "The prefix cannot be empty.".to_string(),
    };

    ctx.say(reply).await?;

    Ok(())
}

/// Disconnect the bot and shut it down.
#[poise::command(prefix_command, slash_command, owners_only, hide_in_help)]
pub async fn shutdown(ctx: Context<'_>) -> Result<(), AppError> {
    tracing::info!("Shutdown requested by {}", ctx.author().id);

    ctx.say("Shutting down...").await?;
    ctx.framework().shard_manager().shutdown_all().await;

    Ok(())
}
