use serenity::all::{ChannelType, GuildChannel, Mentionable};

use crate::{bot::Context, error::AppError, service::guild::GuildService};

/// Set the channel where starred messages are posted.
#[poise::command(
    prefix_command,
    slash_command,
    guild_only,
    required_permissions = "ADMINISTRATOR"
)]
pub async fn setstarboard(
    ctx: Context<'_>,
    #[description = "Text channel for starred messages"]
    #[channel_types("Text")]
    channel: GuildChannel,
) -> Result<(), AppError> {
    let Some(guild_id) = ctx.guild_id() else {
        return Ok(());
    };

    if channel.kind != ChannelType::Text || channel.guild_id != guild_id {
        ctx.say("The starboard must be a text channel in this server.")
            .await?;
        return Ok(());
    }

    let data = ctx.data();
    GuildService::new(&data.db, &data.guilds)
        .set_star_channel(guild_id.get(), channel.id.get())
        .await?;

    tracing::info!("Guild {} starboard set to {}", guild_id, channel.id);

    ctx.say(format!("Starboard channel set to {}.", channel.mention()))
        .await?;

    Ok(())
}
