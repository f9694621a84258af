//! Discord bot built on serenity and poise.
//!
//! `start` wires the framework together: prefix resolution, the command list, the error
//! dispatcher and the gateway event handlers. Commands live under `command`, one module
//! per feature area.
//!
//! # Gateway Intents
//!
//! - `GUILDS` - Guild availability, used to register guilds on first sight
//! - `GUILD_MESSAGES` and `DIRECT_MESSAGES` - Prefix commands
//! - `MESSAGE_CONTENT` - Reading prefix command text (privileged intent)
//! - `GUILD_MESSAGE_REACTIONS` - Starboard
//!
//! Note: `MESSAGE_CONTENT` is a privileged intent and must be enabled in the Discord
//! Developer Portal for the bot application.

pub mod command;
pub mod embed;
pub mod error;
pub mod handler;
pub mod start;

use crate::{error::AppError, state::Data};

pub type Context<'a> = poise::Context<'a, Data, AppError>;
