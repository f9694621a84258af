//! Domain models for starboard entries.

/// Placeholder `star_message_id` while a cross-post is being sent.
pub const PENDING_POST: i64 = 0;

/// A message that has received at least one star.
#[derive(Debug, Clone, PartialEq)]
pub struct StarboardEntry {
    pub base_message_id: u64,
    pub guild_id: u64,
    pub stars: i32,
    /// Cross-post in the guild's star channel, once one has been sent.
    pub star_message_id: Option<u64>,
}

impl StarboardEntry {
    pub fn from_entity(entity: entity::starboard::Model) -> Self {
        Self {
            base_message_id: entity.base_message_id as u64,
            guild_id: entity.guild_id as u64,
            stars: entity.stars,
            star_message_id: entity
                .star_message_id
                .filter(|&id| id != PENDING_POST)
                .map(|id| id as u64),
        }
    }
}

/// What the reaction handler should do after a star was counted.
#[derive(Debug, Clone, PartialEq)]
pub enum StarAction {
    /// No star channel is configured, or another star is sending the cross-post.
    Nothing,
    /// First star: post a new cross-post in `channel_id`.
    Post { channel_id: u64, stars: i32 },
    /// Already cross-posted: edit the existing post with the new count.
    Edit {
        channel_id: u64,
        star_message_id: u64,
        stars: i32,
    },
}

/// How the reaction handler treats a star reaction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StarCheck {
    /// Count the star.
    Count,
    /// Stars from bots are ignored.
    Ignore,
    /// Self-stars and stars on bot messages are taken back.
    Remove,
}
