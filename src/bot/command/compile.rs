use poise::CreateReply;

use crate::{
    bot::{
        embed::{self, EmbedOptions, Invoker},
        Context,
    },
    error::AppError,
    service::piston::{parse_code_block, Execution, PistonService},
};

const OUTPUT_COLOR: u32 = 0x00d200;
const ERROR_COLOR: u32 = 0xd20000;

/// Discord rejects embed field values above 1024 characters.
const MAX_FIELD_LEN: usize = 1000;

/// Wraps program output in a code block. A zero-width space follows every backtick so
/// the output cannot close the fence.
fn code_field(text: &str) -> String {
    let text: String = text
        .replace('`', "`\u{200b}")
        .chars()
        .take(MAX_FIELD_LEN)
        .collect();
    format!("```\n{}\n```", text)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Embed fields and colour for an execution result. Errors win the colour.
fn result_options(execution: &Execution) -> EmbedOptions {
    let mut fields = vec![
        (
            "Language:".to_string(),
            format!("```{}```", capitalize(&execution.language)),
            true,
        ),
        (
            "Version:".to_string(),
            format!("```{}```", execution.version),
            true,
        ),
    ];
    let mut color = None;

    if !execution.run.stdout.is_empty() {
        fields.push(("Output:".to_string(), code_field(&execution.run.stdout), false));
        color = Some(OUTPUT_COLOR);
    }
    if !execution.run.stderr.is_empty() {
        fields.push(("Errors:".to_string(), code_field(&execution.run.stderr), false));
        color = Some(ERROR_COLOR);
    }

    EmbedOptions {
        header: Some("Source code evaluation results".to_string()),
        fields,
        color,
        ..Default::default()
    }
}

/// Run a code block through the Piston API.
#[poise::command(prefix_command, broadcast_typing)]
pub async fn run(ctx: Context<'_>, #[rest] code: String) -> Result<(), AppError> {
    let Some(block) = parse_code_block(&code) else {
        ctx.say(format!(
            "Wrong format. Use a code block.\nSpecify lang inside first set of triple backticks. Example:\n\n{}run \\`\\`\\`python\nprint('This is a test')\\`\\`\\`",
            ctx.prefix()
        ))
        .await?;
        return Ok(());
    };

    let data = ctx.data();
    let piston = PistonService::new(&data.http_client);

    if data.piston_languages.read().await.is_empty() {
        let languages = piston.languages().await?;
        tracing::debug!("Cached {} Piston languages", languages.len());
        *data.piston_languages.write().await = languages;
    }

    if !data
        .piston_languages
        .read()
        .await
        .contains(&block.language)
    {
        ctx.say(format!("{} is not a supported language.", block.language))
            .await?;
        return Ok(());
    }

    let execution = piston.execute(&block).await?;
    let bot_avatar = ctx.cache().current_user().avatar_url();

    let embed = embed::build(
        &Invoker::from(ctx.author()),
        bot_avatar.as_deref(),
        result_options(&execution),
    );

    ctx.send(CreateReply::default().embed(embed).reply(true))
        .await?;

    Ok(())
}
