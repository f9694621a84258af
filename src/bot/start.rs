use std::{collections::HashSet, sync::atomic::Ordering};

use chrono::Utc;
use serenity::all::{ClientBuilder, GatewayIntents, GuildId, UserId};
use tokio::sync::RwLock;

use crate::{
    bot::{command, error, handler},
    cache::GuildCache,
    config::Config,
    data::Database,
    error::AppError,
    scheduler::database_sync,
    service::guild::GuildService,
    state::Data,
};

/// Resolves the prefix for an incoming message from the guild cache.
async fn dynamic_prefix(
    ctx: poise::PartialContext<'_, Data, AppError>,
) -> Result<Option<String>, AppError> {
    let prefix = GuildService::new(&ctx.data.db, &ctx.data.guilds)
        .prefix(ctx.guild_id.map(|id| id.get()))
        .await?;

    Ok(Some(prefix))
}

fn framework_options(config: &Config) -> poise::FrameworkOptions<Data, AppError> {
    let mut owners = HashSet::new();
    if let Some(owner_id) = config.owner_id {
        owners.insert(UserId::new(owner_id));
    }

    poise::FrameworkOptions {
        commands: command::all(),
        prefix_options: poise::PrefixFrameworkOptions {
            dynamic_prefix: Some(|ctx| Box::pin(dynamic_prefix(ctx))),
            mention_as_prefix: true,
            case_insensitive_commands: true,
            ignore_bots: true,
            ..Default::default()
        },
        owners,
        on_error: |error| Box::pin(error::on_error(error)),
        post_command: |ctx| {
            Box::pin(async move {
                ctx.data().invokes.fetch_add(1, Ordering::Relaxed);
                tracing::debug!("Executed command {}", ctx.command().qualified_name);
            })
        },
        event_handler: |ctx, event, framework, data| {
            Box::pin(handler::handle_event(ctx, event, framework, data))
        },
        ..Default::default()
    }
}

/// Runs the bot until it is stopped with Ctrl-C or the `shutdown` command.
///
/// Slash commands are registered in the home guild once the gateway is ready, or
/// globally when `GLOBAL_COMMANDS` is set. On exit the scheduler is shut down and the
/// database committed and closed.
///
/// # Arguments
/// - `config` - Application configuration
/// - `db` - Connected and migrated database
/// - `guilds` - Guild cache loaded from `db`
/// - `http_client` - HTTP client for third-party APIs
pub async fn start_bot(
    config: &Config,
    db: Database,
    guilds: GuildCache,
    http_client: reqwest::Client,
) -> Result<(), AppError> {
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT
        | GatewayIntents::GUILD_MESSAGE_REACTIONS
        | GatewayIntents::DIRECT_MESSAGES;

    let mut scheduler = database_sync::create_scheduler(db.clone()).await?;

    let home_guild = GuildId::new(config.home_guild);
    let global_commands = config.global_commands;
    let cat_api_key = config.cat_api_key.clone();
    let data_db = db.clone();
    let ready_scheduler = scheduler.clone();

    let framework = poise::Framework::builder()
        .options(framework_options(config))
        .setup(move |ctx, ready, framework| {
            Box::pin(async move {
                let commands = &framework.options().commands;
                if global_commands {
                    poise::builtins::register_globally(ctx, commands).await?;
                    tracing::info!("Registered {} commands globally", commands.len());
                } else {
                    poise::builtins::register_in_guild(ctx, commands, home_guild).await?;
                    tracing::info!(
                        "Registered {} commands in guild {}",
                        commands.len(),
                        home_guild
                    );
                }

                ready_scheduler.start().await?;
                tracing::info!("Database sync scheduler started");

                tracing::info!("{} is ready", ready.user.name);

                Ok(Data {
                    db: data_db,
                    guilds,
                    http_client,
                    cat_api_key,
                    started_at: Utc::now(),
                    invokes: Default::default(),
                    piston_languages: RwLock::new(Vec::new()),
                })
            })
        })
        .build();

    let mut client = ClientBuilder::new(&config.token, intents)
        .framework(framework)
        .await?;

    let shard_manager = client.shard_manager.clone();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            return;
        }

        tracing::info!("Received Ctrl-C, shutting down");
        shard_manager.shutdown_all().await;
    });

    tracing::info!("Connecting to Discord...");

    client.start().await?;

    tracing::info!("Gateway closed, cleaning up");

    scheduler.shutdown().await?;
    db.close().await?;

    Ok(())
}
