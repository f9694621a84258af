//! `tag` command group.
//!
//! With the prefix, `tag <name>` shows a tag directly; any word that is not a subcommand
//! name falls through to the parent. Slash users go through `/tag get`.

use std::{num::NonZeroU64, time::Duration};

use serenity::all::{Mentionable, MessageCollector, User, UserId};

use crate::{
    bot::Context,
    error::AppError,
    model::tag::{Confirmation, CreateOutcome, TagMutation},
    service::tag::{normalize_name, TagService},
};

/// How long `tag edit` waits for an answer before giving up.
const CONFIRMATION_TIMEOUT: Duration = Duration::from_secs(30);

fn not_found(name: &str) -> String {
    format!("`{}` is not a valid tag.", normalize_name(name))
}

/// Mentions a stored tag owner; 0 is not a valid user id.
fn mention_owner(owner: u64) -> String {
    match NonZeroU64::new(owner) {
        Some(id) => UserId::from(id).mention().to_string(),
        None => "an unknown user".to_string(),
    }
}

fn not_owner(owner: u64) -> String {
    format!(
        "You can't do that, this tag belongs to {}.",
        mention_owner(owner)
    )
}

/// Show, create and manage text snippets for this server.
#[poise::command(
    prefix_command,
    slash_command,
    guild_only,
    subcommands(
        "tag_get",
        "tag_list",
        "tag_create",
        "tag_edit",
        "tag_transfer",
        "tag_delete",
        "tag_info"
    )
)]
pub async fn tag(ctx: Context<'_>, #[rest] name: Option<String>) -> Result<(), AppError> {
    match name {
        Some(name) => show(ctx, &name).await,
        None => {
            ctx.say("Usage: `tag <name>` or `tag <create|edit|transfer|delete|info|list> ...`")
                .await?;
            Ok(())
        }
    }
}

async fn show(ctx: Context<'_>, name: &str) -> Result<(), AppError> {
    let Some(guild_id) = ctx.guild_id() else {
        return Ok(());
    };

    let reply = match TagService::new(&ctx.data().db)
        .get(guild_id.get(), name)
        .await?
    {
        Some(content) => content,
        None => not_found(name),
    };

    ctx.say(reply).await?;

    Ok(())
}

/// Show a tag.
#[poise::command(prefix_command, slash_command, guild_only, rename = "get")]
pub async fn tag_get(
    ctx: Context<'_>,
    #[description = "Tag name"] name: String,
) -> Result<(), AppError> {
    show(ctx, &name).await
}

/// List every tag in this server.
#[poise::command(prefix_command, slash_command, guild_only, rename = "list")]
pub async fn tag_list(ctx: Context<'_>) -> Result<(), AppError> {
    let Some(guild_id) = ctx.guild_id() else {
        return Ok(());
    };

    let names = TagService::new(&ctx.data().db).list(guild_id.get()).await?;

    let reply = if names.is_empty() {
        "This server has no tags yet.".to_string()
    } else {
        format!(
            "**Tags ({})**\n{}",
            names.len(),
            names
                .iter()
                .map(|name| format!("`{}`", name))
                .collect::<Vec<_>>()
                .join(", ")
        )
    };

    ctx.say(reply).await?;

    Ok(())
}

async fn create_and_reply(ctx: Context<'_>, name: &str, content: &str) -> Result<(), AppError> {
    let Some(guild_id) = ctx.guild_id() else {
        return Ok(());
    };

    let outcome = TagService::new(&ctx.data().db)
        .create(guild_id.get(), name, ctx.author().id.get(), content)
        .await?;

    let name = normalize_name(name);
    let reply = match outcome {
        CreateOutcome::Created => format!("Tag `{}` created.", name),
        CreateOutcome::Reserved => format!("`{}` is a reserved name and can't be used.", name),
        CreateOutcome::AlreadyExists { owner } => format!(
            "Tag `{}` already exists and belongs to {}.",
            name,
            mention_owner(owner)
        ),
    };

    ctx.say(reply).await?;

    Ok(())
}

/// Create a new tag owned by you.
#[poise::command(prefix_command, slash_command, guild_only, rename = "create")]
pub async fn tag_create(
    ctx: Context<'_>,
    #[description = "Tag name"] name: String,
    #[description = "Tag content"]
    #[rest]
    content: String,
) -> Result<(), AppError> {
    create_and_reply(ctx, &name, &content).await
}

/// Replace the content of a tag you own.
#[poise::command(prefix_command, slash_command, guild_only, rename = "edit")]
pub async fn tag_edit(
    ctx: Context<'_>,
    #[description = "Tag name"] name: String,
    #[description = "New content"]
    #[rest]
    content: String,
) -> Result<(), AppError> {
    let Some(guild_id) = ctx.guild_id() else {
        return Ok(());
    };

    let outcome = TagService::new(&ctx.data().db)
        .edit(guild_id.get(), &name, ctx.author().id.get(), &content)
        .await?;

    match outcome {
        TagMutation::Applied => {
            ctx.say(format!("Tag `{}` updated.", normalize_name(&name)))
                .await?;
        }
        TagMutation::NotOwner { owner } => {
            ctx.say(not_owner(owner)).await?;
        }
        TagMutation::Missing => {
            ctx.say(format!(
                "{}\nWould you like to create it now? (yes/no)",
                not_found(&name)
            ))
            .await?;

            let reply = MessageCollector::new(ctx.serenity_context())
                .author_id(ctx.author().id)
                .channel_id(ctx.channel_id())
                .timeout(CONFIRMATION_TIMEOUT)
                .await;

            match Confirmation::from_reply(reply.as_ref().map(|m| m.content.as_str())) {
                Confirmation::Accepted => create_and_reply(ctx, &name, &content).await?,
                Confirmation::Declined => {
                    ctx.say("Okay, no tag was created.").await?;
                }
                Confirmation::TimedOut => {
                    ctx.say("No answer within 30 seconds, no tag was created.")
                        .await?;
                }
            }
        }
    }

    Ok(())
}

/// Give a tag you own to another member.
#[poise::command(prefix_command, slash_command, guild_only, rename = "transfer")]
pub async fn tag_transfer(
    ctx: Context<'_>,
    #[description = "Tag name"] name: String,
    #[description = "New owner"] member: User,
) -> Result<(), AppError> {
    let Some(guild_id) = ctx.guild_id() else {
        return Ok(());
    };

    let outcome = TagService::new(&ctx.data().db)
        .transfer(
            guild_id.get(),
            &name,
            ctx.author().id.get(),
            member.id.get(),
        )
        .await?;

    let reply = match outcome {
        TagMutation::Applied => format!(
            "Tag `{}` now belongs to {}.",
            normalize_name(&name),
            member.mention()
        ),
        TagMutation::NotOwner { owner } => not_owner(owner),
        TagMutation::Missing => not_found(&name),
    };

    ctx.say(reply).await?;

    Ok(())
}

/// Delete a tag you own.
#[poise::command(prefix_command, slash_command, guild_only, rename = "delete")]
pub async fn tag_delete(
    ctx: Context<'_>,
    #[description = "Tag name"] name: String,
) -> Result<(), AppError> {
    let Some(guild_id) = ctx.guild_id() else {
        return Ok(());
    };

    let outcome = TagService::new(&ctx.data().db)
        .delete(guild_id.get(), &name, ctx.author().id.get())
        .await?;

    let reply = match outcome {
        TagMutation::Applied => format!("Tag `{}` deleted.", normalize_name(&name)),
        TagMutation::NotOwner { owner } => not_owner(owner),
        TagMutation::Missing => not_found(&name),
    };

    ctx.say(reply).await?;

    Ok(())
}

/// Show who owns a tag and how often it was used.
#[poise::command(prefix_command, slash_command, guild_only, rename = "info")]
pub async fn tag_info(
    ctx: Context<'_>,
    #[description = "Tag name"] name: String,
) -> Result<(), AppError> {
    let Some(guild_id) = ctx.guild_id() else {
        return Ok(());
    };

    let reply = match TagService::new(&ctx.data().db)
        .info(guild_id.get(), &name)
        .await?
    {
        Some(info) => format!(
            "**Tag:** `{}`\n**Owner:** {}\n**Length:** {} characters\n**Uses:** {}",
            info.name,
            mention_owner(info.owner),
            info.content_length,
            info.uses
        ),
        None => not_found(&name),
    };

    ctx.say(reply).await?;

    Ok(())
}
