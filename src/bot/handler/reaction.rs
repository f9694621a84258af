//! Starboard reaction handler.
//!
//! A star from anyone but the author counts once per reaction event. The first counted
//! star cross-posts the message to the guild's star channel; later stars edit that post.
//! Stars on one's own message or on a bot's message are removed.

use serenity::all::{
    ChannelId, Context, CreateMessage, EditMessage, Mentionable, Message, MessageId, Reaction,
    ReactionType,
};

use crate::{
    bot::embed::{self, EmbedOptions, Invoker},
    error::AppError,
    model::starboard::{StarAction, StarCheck},
    service::starboard::{check_star, is_star, StarboardService},
    state::Data,
};

pub async fn handle_reaction_add(ctx: &Context, data: &Data, reaction: &Reaction) {
    if let Err(e) = star_message(ctx, data, reaction).await {
        tracing::error!(
            "Failed to process star on message {}: {}",
            reaction.message_id,
            e
        );
    }
}

fn star_line(stars: i32, message: &Message) -> String {
    format!("⭐ **{}** {}", stars, message.channel_id.mention())
}

fn star_embed(ctx: &Context, message: &Message) -> serenity::all::CreateEmbed {
    let bot_avatar = ctx.cache.current_user().avatar_url();

    embed::build(
        &Invoker::from(&message.author),
        bot_avatar.as_deref(),
        EmbedOptions {
            description: Some(message.content.clone()),
            header: Some(message.author.display_name().to_string()),
            header_icon: message.author.avatar_url(),
            fields: vec![(
                "Source".to_string(),
                format!("[Jump to message]({})", message.link()),
                false,
            )],
            footer: Some(format!("Message ID: {}", message.id)),
            image: message.attachments.first().map(|a| a.url.clone()),
            ..Default::default()
        },
    )
}

async fn star_message(ctx: &Context, data: &Data, reaction: &Reaction) -> Result<(), AppError> {
    let (Some(guild_id), ReactionType::Unicode(emoji)) = (reaction.guild_id, &reaction.emoji)
    else {
        return Ok(());
    };
    if !is_star(emoji) {
        return Ok(());
    }

    let user = reaction.user(ctx).await?;
    let message = reaction.message(ctx).await?;

    match check_star(
        message.author.id.get(),
        message.author.bot,
        user.id.get(),
        user.bot,
    ) {
        StarCheck::Count => {}
        StarCheck::Ignore => return Ok(()),
        StarCheck::Remove => {
            tracing::debug!("Removing star by {} on {}", user.id, message.id);
            reaction.delete(ctx).await?;
            return Ok(());
        }
    }

    let service = StarboardService::new(&data.db, &data.guilds);

    match service.star(guild_id.get(), message.id.get()).await? {
        StarAction::Nothing => {}
        StarAction::Post { channel_id, stars } => {
            let post = ChannelId::new(channel_id)
                .send_message(
                    ctx,
                    CreateMessage::new()
                        .content(star_line(stars, &message))
                        .embed(star_embed(ctx, &message)),
                )
                .await;

            match post {
                Ok(post) => service.record_post(message.id.get(), post.id.get()).await?,
                Err(e) => {
                    service.abandon_post(message.id.get()).await?;
                    return Err(e.into());
                }
            }
        }
        StarAction::Edit {
            channel_id,
            star_message_id,
            stars,
        } => {
            ChannelId::new(channel_id)
                .edit_message(
                    ctx,
                    MessageId::new(star_message_id),
                    EditMessage::new().content(star_line(stars, &message)),
                )
                .await?;
        }
    }

    Ok(())
}
