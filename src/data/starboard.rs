use sea_orm::DbErr;

use crate::{
    data::Database,
    model::starboard::{StarboardEntry, PENDING_POST},
};

pub struct StarboardRepository<'a> {
    db: &'a Database,
}

impl<'a> StarboardRepository<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Counts one star on a message, creating its entry on the first star.
    ///
    /// # Returns
    /// - `Ok(stars)` - Star count after this star
    /// - `Err(DbErr)` - Database error, or the store returned no row
    pub async fn upsert_star(&self, base_message_id: u64, guild_id: u64) -> Result<i32, DbErr> {
        self.db
            .field::<i32>(
                "INSERT INTO starboard (base_message_id, guild_id, stars) VALUES ($1, $2, 1) \
                 ON CONFLICT (base_message_id) DO UPDATE SET stars = starboard.stars + 1 \
                 RETURNING stars",
                vec![(base_message_id as i64).into(), (guild_id as i64).into()],
            )
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("starboard entry {base_message_id}")))
    }

    /// Reserves the cross-post of a message for the caller.
    ///
    /// Marks the entry with [`PENDING_POST`] while no cross-post exists, so concurrent
    /// stars on the same message cannot both post.
    ///
    /// # Returns
    /// - `Ok(true)` - The caller must post and then call `set_star_message`
    /// - `Ok(false)` - A cross-post exists or another star is posting it
    /// - `Err(DbErr)` - Database error
    pub async fn claim_post(&self, base_message_id: u64) -> Result<bool, DbErr> {
        let claimed = self
            .db
            .execute(
                "UPDATE starboard SET star_message_id = $1 \
                 WHERE base_message_id = $2 AND star_message_id IS NULL",
                vec![PENDING_POST.into(), (base_message_id as i64).into()],
            )
            .await?;

        Ok(claimed == 1)
    }

    /// Drops a claim taken with `claim_post` whose cross-post could not be sent.
    pub async fn release_post(&self, base_message_id: u64) -> Result<u64, DbErr> {
        self.db
            .execute(
                "UPDATE starboard SET star_message_id = NULL \
                 WHERE base_message_id = $1 AND star_message_id = $2",
                vec![(base_message_id as i64).into(), PENDING_POST.into()],
            )
            .await
    }

    pub async fn set_star_message(
        &self,
        base_message_id: u64,
        star_message_id: u64,
    ) -> Result<u64, DbErr> {
        self.db
            .execute(
                "UPDATE starboard SET star_message_id = $1 WHERE base_message_id = $2",
                vec![(star_message_id as i64).into(), (base_message_id as i64).into()],
            )
            .await
    }

    pub async fn entry(&self, base_message_id: u64) -> Result<Option<StarboardEntry>, DbErr> {
        let entry = self
            .db
            .row::<entity::starboard::Model>(
                "SELECT base_message_id, guild_id, stars, star_message_id \
                 FROM starboard WHERE base_message_id = $1",
                vec![(base_message_id as i64).into()],
            )
            .await?;

        Ok(entry.map(StarboardEntry::from_entity))
    }
}
