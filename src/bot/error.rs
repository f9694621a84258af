//! Command error dispatcher.
//!
//! Known framework errors (missing arguments, missing permissions, failed argument
//! conversion) become a formatted reply. Errors returned by a command are logged and the
//! invocation ends there. Everything else goes to poise's default handler.

use poise::FrameworkError;
use serenity::all::Permissions;

use crate::{error::AppError, state::Data};

fn bullet_block(items: &[&str]) -> String {
    let lines: Vec<String> = items.iter().map(|item| format!(" > {}", item)).collect();
    format!("```\n{}\n```", lines.join("\n"))
}

/// Counts the arguments in a prefix invocation, treating a `"quoted string"` as one.
fn count_arguments(args: &str) -> usize {
    let mut count = 0;
    let mut rest = args.trim_start();

    while !rest.is_empty() {
        count += 1;
        rest = match rest.strip_prefix('"') {
            Some(quoted) => match quoted.find('"') {
                Some(end) => &quoted[end + 1..],
                None => "",
            },
            None => match rest.find(char::is_whitespace) {
                Some(end) => &rest[end..],
                None => "",
            },
        }
        .trim_start();
    }

    count
}

/// Names the required parameters not covered by the supplied `args`.
///
/// `parameters` is every declared parameter in order with whether it is required. When
/// the supplied arguments cannot be matched up, every required parameter is listed.
pub fn missing_parameters<'a>(parameters: &[(&'a str, bool)], args: &str) -> Vec<&'a str> {
    let required_name = |(name, required): &(&'a str, bool)| required.then_some(*name);

    let missing: Vec<&str> = parameters
        .iter()
        .skip(count_arguments(args))
        .filter_map(required_name)
        .collect();

    if missing.is_empty() {
        parameters.iter().filter_map(required_name).collect()
    } else {
        missing
    }
}

pub fn missing_arguments_message(arguments: &[&str]) -> String {
    format!(
        "**ERROR**\nRequired argument(s) were missing:\n{}",
        bullet_block(arguments)
    )
}

pub fn missing_permissions_message(permissions: Permissions) -> String {
    format!(
        "**ERROR**\nYou are missing the permission(s) required to run this command.\n{}",
        bullet_block(&permissions.get_permission_names())
    )
}

pub fn conversion_failure_message(command: &str) -> String {
    format!(
        "**ERROR**\nConversion of arguments failed during `{}` command.",
        command
    )
}

pub async fn on_error(error: FrameworkError<'_, Data, AppError>) {
    match error {
        FrameworkError::ArgumentParse { error, ctx, .. } => {
            let message = if error.is::<poise::TooFewArguments>() {
                let parameters: Vec<(&str, bool)> = ctx
                    .command()
                    .parameters
                    .iter()
                    .map(|param| (param.name.as_str(), param.required))
                    .collect();
                let args = match ctx {
                    poise::Context::Prefix(prefix) => prefix.args,
                    poise::Context::Application(_) => "",
                };
                missing_arguments_message(&missing_parameters(&parameters, args))
            } else {
                conversion_failure_message(&ctx.command().qualified_name)
            };

            if let Err(e) = ctx.say(message).await {
                tracing::error!("Failed to report argument error: {}", e);
            }
        }
        FrameworkError::MissingUserPermissions {
            missing_permissions: Some(permissions),
            ctx,
            ..
        } => {
            if let Err(e) = ctx.say(missing_permissions_message(permissions)).await {
                tracing::error!("Failed to report missing permissions: {}", e);
            }
        }
        FrameworkError::Command { error, ctx, .. } => {
            tracing::error!(
                "Command `{}` failed: {}",
                ctx.command().qualified_name,
                error
            );
        }
        error => {
            if let Err(e) = poise::builtins::on_error(error).await {
                tracing::error!("Error while handling error: {}", e);
            }
        }
    }
}
