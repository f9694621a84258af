//! Reply embeds with the bot's house style applied.
//!
//! `build` fills every field a command leaves unset: purple colour, `Guildbot` as author,
//! an "Invoked by" footer carrying the invoker's avatar and the bot avatar as thumbnail.

use serenity::all::{CreateEmbed, CreateEmbedAuthor, CreateEmbedFooter, Timestamp, User};

pub const DEFAULT_COLOR: u32 = 0x713dc7;
pub const DEFAULT_HEADER: &str = "Guildbot";

/// The user a reply is addressed to.
#[derive(Debug, Clone, PartialEq)]
pub struct Invoker {
    pub name: String,
    pub avatar: Option<String>,
}

impl From<&User> for Invoker {
    fn from(user: &User) -> Self {
        Self {
            name: user.display_name().to_string(),
            avatar: user.avatar_url(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct EmbedOptions {
    pub title: Option<String>,
    pub description: Option<String>,
    /// `(name, value, inline)` triples in display order.
    pub fields: Vec<(String, String, bool)>,
    pub footer: Option<String>,
    pub header: Option<String>,
    pub header_icon: Option<String>,
    pub thumbnail: Option<String>,
    pub image: Option<String>,
    pub color: Option<u32>,
}

pub fn build(invoker: &Invoker, bot_avatar: Option<&str>, options: EmbedOptions) -> CreateEmbed {
    let mut author =
        CreateEmbedAuthor::new(options.header.unwrap_or_else(|| DEFAULT_HEADER.to_string()));
    if let Some(icon) = options.header_icon {
        author = author.icon_url(icon);
    }

    let mut footer = CreateEmbedFooter::new(
        options
            .footer
            .unwrap_or_else(|| format!("Invoked by: {}", invoker.name)),
    );
    if let Some(icon) = invoker.avatar.as_deref().or(bot_avatar) {
        footer = footer.icon_url(icon);
    }

    let mut embed = CreateEmbed::new()
        .author(author)
        .footer(footer)
        .color(options.color.unwrap_or(DEFAULT_COLOR))
        .timestamp(Timestamp::now())
        .fields(options.fields);

    if let Some(title) = options.title {
        embed = embed.title(title);
    }
    if let Some(description) = options.description {
        embed = embed.description(description);
    }
    if let Some(thumbnail) = options.thumbnail.as_deref().or(bot_avatar) {
        embed = embed.thumbnail(thumbnail);
    }
    if let Some(image) = options.image {
        embed = embed.image(image);
    }

    embed
}
