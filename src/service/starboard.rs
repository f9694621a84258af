use crate::{
    cache::GuildCache,
    data::{Database, StarboardRepository},
    error::AppError,
    model::starboard::{StarAction, StarCheck},
    service::guild::GuildService,
};

/// Reactions that count as a star.
pub const STAR_EMOJIS: [&str; 2] = ["⭐", "🌟"];

pub fn is_star(emoji: &str) -> bool {
    STAR_EMOJIS.contains(&emoji)
}

/// Decides whether a star by `reactor_id` on a message by `author_id` counts.
pub fn check_star(
    author_id: u64,
    author_is_bot: bool,
    reactor_id: u64,
    reactor_is_bot: bool,
) -> StarCheck {
    if reactor_is_bot {
        StarCheck::Ignore
    } else if author_is_bot || author_id == reactor_id {
        StarCheck::Remove
    } else {
        StarCheck::Count
    }
}

pub struct StarboardService<'a> {
    db: &'a Database,
    cache: &'a GuildCache,
}

impl<'a> StarboardService<'a> {
    pub fn new(db: &'a Database, cache: &'a GuildCache) -> Self {
        Self { db, cache }
    }

    /// Counts a star on `message_id` and decides what to do with the cross-post.
    ///
    /// Only one caller ever receives [`StarAction::Post`] for a message; it must follow
    /// up with `record_post`, or `abandon_post` if sending fails.
    ///
    /// The counter is kept even when the guild has no star channel, so configuring one
    /// later does not reset existing counts.
    pub async fn star(&self, guild_id: u64, message_id: u64) -> Result<StarAction, AppError> {
        let repo = StarboardRepository::new(self.db);
        let stars = repo.upsert_star(message_id, guild_id).await?;

        let Some(channel_id) = GuildService::new(self.db, self.cache)
            .star_channel(guild_id)
            .await?
        else {
            return Ok(StarAction::Nothing);
        };

        if repo.claim_post(message_id).await? {
            return Ok(StarAction::Post { channel_id, stars });
        }

        let star_message_id = repo
            .entry(message_id)
            .await?
            .and_then(|entry| entry.star_message_id);

        Ok(match star_message_id {
            Some(star_message_id) => StarAction::Edit {
                channel_id,
                star_message_id,
                stars,
            },
            None => {
                tracing::debug!("Cross-post for message {} is already being sent", message_id);
                StarAction::Nothing
            }
        })
    }

    /// Remembers the cross-post made for a starred message.
    pub async fn record_post(&self, message_id: u64, star_message_id: u64) -> Result<(), AppError> {
        StarboardRepository::new(self.db)
            .set_star_message(message_id, star_message_id)
            .await?;

        Ok(())
    }

    /// Releases the cross-post claim of a message whose post failed to send.
    pub async fn abandon_post(&self, message_id: u64) -> Result<(), AppError> {
        StarboardRepository::new(self.db)
            .release_post(message_id)
            .await?;

        Ok(())
    }
}
