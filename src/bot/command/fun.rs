use poise::CreateReply;

use crate::{
    bot::{
        embed::{self, EmbedOptions, Invoker},
        Context,
    },
    error::AppError,
    service::cat::CatService,
};

/// Fetch a random kitty.
#[poise::command(prefix_command, slash_command)]
pub async fn kitties(ctx: Context<'_>) -> Result<(), AppError> {
    let data = ctx.data();

    let Some(api_key) = data.cat_api_key.as_deref() else {
        tracing::warn!("kitties invoked without CAT_API_KEY configured");
        ctx.say("Unable to fetch a kitty right now :(").await?;
        return Ok(());
    };

    let url = match CatService::new(&data.http_client, api_key)
        .random_image()
        .await
    {
        Ok(url) => url,
        Err(e) => {
            tracing::warn!("TheCatAPI request failed: {}", e);
            ctx.say("Unable to fetch a kitty right now :(").await?;
            return Ok(());
        }
    };

    let bot_avatar = ctx.cache().current_user().avatar_url();
    let embed = embed::build(
        &Invoker::from(ctx.author()),
        bot_avatar.as_deref(),
        EmbedOptions {
            title: Some("Kitty!".to_string()),
            image: Some(url),
            ..Default::default()
        },
    );

    ctx.send(CreateReply::default().embed(embed)).await?;

    Ok(())
}
