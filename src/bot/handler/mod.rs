//! Gateway event handlers.
//!
//! Failures are logged inside each handler and never reach the framework's error hook,
//! so one failing event never affects the next.

use serenity::all::{Context, FullEvent};

use crate::{error::AppError, state::Data};

pub mod guild;
pub mod reaction;
pub mod ready;

pub async fn handle_event(
    ctx: &Context,
    event: &FullEvent,
    _framework: poise::FrameworkContext<'_, Data, AppError>,
    data: &Data,
) -> Result<(), AppError> {
    match event {
        FullEvent::Ready { data_about_bot } => {
            ready::handle_ready(data, data_about_bot).await;
        }
        FullEvent::GuildCreate { guild, is_new } => {
            guild::handle_guild_create(data, guild, *is_new).await;
        }
        FullEvent::ReactionAdd { add_reaction } => {
            reaction::handle_reaction_add(ctx, data, add_reaction).await;
        }
        _ => {}
    }

    Ok(())
}
