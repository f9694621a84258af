use std::{sync::atomic::Ordering, time::Instant};

use chrono::Utc;
use poise::CreateReply;

use crate::{
    bot::{
        embed::{self, EmbedOptions, Invoker},
        Context,
    },
    error::AppError,
};

const LIBRARIES: &str = "serenity 0.12 / poise 0.6";

/// Formats a duration in seconds as `1d 2h 3m 4s`, leaving out leading zero units.
pub fn format_duration(total_seconds: i64) -> String {
    let total_seconds = total_seconds.max(0);
    let days = total_seconds / 86_400;
    let hours = total_seconds % 86_400 / 3_600;
    let minutes = total_seconds % 3_600 / 60;
    let seconds = total_seconds % 60;

    if days > 0 {
        format!("{}d {}h {}m {}s", days, hours, minutes, seconds)
    } else if hours > 0 {
        format!("{}h {}m {}s", hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}

/// Show gateway and REST latency.
#[poise::command(prefix_command, slash_command)]
pub async fn ping(ctx: Context<'_>) -> Result<(), AppError> {
    let gateway = ctx.ping().await;

    let start = Instant::now();
    let reply = ctx.say("Pinging...").await?;
    let rest = start.elapsed();

    reply
        .edit(
            ctx,
            CreateReply::default().content(format!(
                "**Gateway**: {} ms\n**REST**: {} ms",
                gateway.as_millis(),
                rest.as_millis()
            )),
        )
        .await?;

    Ok(())
}

/// Show bot statistics.
#[poise::command(prefix_command, slash_command)]
pub async fn stats(ctx: Context<'_>) -> Result<(), AppError> {
    let data = ctx.data();
    let cache = ctx.cache();

    let uptime = (Utc::now() - data.started_at).num_seconds();
    let latency = ctx.ping().await;
    let bot_avatar = cache.current_user().avatar_url();

    let fields = vec![
        ("Bot version".to_string(), env!("CARGO_PKG_VERSION").to_string(), true),
        ("Libraries".to_string(), LIBRARIES.to_string(), true),
        ("Guilds".to_string(), cache.guild_count().to_string(), true),
        ("Users".to_string(), cache.user_count().to_string(), true),
        ("Database calls".to_string(), data.db.calls().to_string(), true),
        (
            "Invocations".to_string(),
            data.invokes.load(Ordering::Relaxed).to_string(),
            true,
        ),
        ("Latency".to_string(), format!("{} ms", latency.as_millis()), true),
        ("Uptime".to_string(), format_duration(uptime), true),
    ];

    let embed = embed::build(
        &Invoker::from(ctx.author()),
        bot_avatar.as_deref(),
        EmbedOptions {
            title: Some("System stats".to_string()),
            fields,
            ..Default::default()
        },
    );

    ctx.send(CreateReply::default().embed(embed)).await?;

    Ok(())
}
