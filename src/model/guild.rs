//! Domain models for per-guild configuration.

/// Prefix used in direct messages and for guilds without a stored row.
pub const DEFAULT_PREFIX: &str = "$";

/// Maximum prefix length, counted in characters.
pub const MAX_PREFIX_LEN: usize = 3;

/// Cached configuration of a single guild.
#[derive(Debug, Clone, PartialEq)]
pub struct GuildConfig {
    /// Discord guild ID.
    pub guild_id: u64,
    /// Command prefix for text commands in this guild.
    pub prefix: String,
    /// Channel where starred messages are cross-posted.
    pub star_channel: Option<u64>,
}

impl GuildConfig {
    /// Configuration of a guild that was just seen for the first time.
    pub fn with_defaults(guild_id: u64) -> Self {
        Self {
            guild_id,
            prefix: DEFAULT_PREFIX.to_string(),
            star_channel: None,
        }
    }

    /// Converts an entity model to a guild configuration at the repository boundary.
    pub fn from_entity(entity: entity::guild::Model) -> Self {
        Self {
            guild_id: entity.guild_id as u64,
            prefix: entity.prefix,
            star_channel: entity.star_channel.map(|id| id as u64),
        }
    }
}

/// Result of a prefix change request.
#[derive(Debug, Clone, PartialEq)]
pub enum PrefixUpdate {
    /// Prefix stored and cached.
    Updated(String),
    /// Prefix has more than `MAX_PREFIX_LEN` characters. Nothing was written.
    TooLong,
    /// Prefix is empty or only whitespace. Nothing was written.
    Empty,
}
