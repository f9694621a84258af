//! Tag storage. Callers pass names already lowercased.

use sea_orm::DbErr;

use crate::{data::Database, model::tag::TagInfo};

pub struct TagRepository<'a> {
    db: &'a Database,
}

impl<'a> TagRepository<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Bumps the use counter of a tag and returns its content.
    ///
    /// # Returns
    /// - `Ok(Some(content))` - Tag exists, `uses` was incremented by one
    /// - `Ok(None)` - No such tag, nothing was written
    pub async fn get_and_increment(
        &self,
        guild_id: u64,
        name: &str,
    ) -> Result<Option<String>, DbErr> {
        self.db
            .field::<String>(
                "UPDATE tags SET uses = uses + 1 \
                 WHERE guild_id = $1 AND tag_name = $2 \
                 RETURNING tag_content",
                vec![(guild_id as i64).into(), name.into()],
            )
            .await
    }

    /// Bumps the use counter of a tag and returns its owner.
    pub async fn increment_returning_owner(
        &self,
        guild_id: u64,
        name: &str,
    ) -> Result<Option<u64>, DbErr> {
        let owner = self
            .db
            .field::<i64>(
                "UPDATE tags SET uses = uses + 1 \
                 WHERE guild_id = $1 AND tag_name = $2 \
                 RETURNING tag_owner",
                vec![(guild_id as i64).into(), name.into()],
            )
            .await?;

        Ok(owner.map(|id| id as u64))
    }

    pub async fn owner(&self, guild_id: u64, name: &str) -> Result<Option<u64>, DbErr> {
        let owner = self
            .db
            .field::<i64>(
                "SELECT tag_owner FROM tags WHERE guild_id = $1 AND tag_name = $2",
                vec![(guild_id as i64).into(), name.into()],
            )
            .await?;

        Ok(owner.map(|id| id as u64))
    }

    /// Inserts a new tag with zero uses.
    ///
    /// # Returns
    /// - `Ok(true)` - Tag created
    /// - `Ok(false)` - A tag with this name already exists in the guild
    pub async fn insert(
        &self,
        guild_id: u64,
        name: &str,
        owner: u64,
        content: &str,
    ) -> Result<bool, DbErr> {
        let inserted = self
            .db
            .execute(
                "INSERT INTO tags (guild_id, tag_name, tag_owner, tag_content, uses) \
                 VALUES ($1, $2, $3, $4, 0) \
                 ON CONFLICT (guild_id, tag_name) DO NOTHING",
                vec![
                    (guild_id as i64).into(),
                    name.into(),
                    (owner as i64).into(),
                    content.into(),
                ],
            )
            .await?;

        Ok(inserted > 0)
    }

    pub async fn update_content(
        &self,
        guild_id: u64,
        name: &str,
        content: &str,
    ) -> Result<u64, DbErr> {
        self.db
            .execute(
                "UPDATE tags SET tag_content = $1 WHERE guild_id = $2 AND tag_name = $3",
                vec![content.into(), (guild_id as i64).into(), name.into()],
            )
            .await
    }

    pub async fn update_owner(&self, guild_id: u64, name: &str, owner: u64) -> Result<u64, DbErr> {
        self.db
            .execute(
                "UPDATE tags SET tag_owner = $1 WHERE guild_id = $2 AND tag_name = $3",
                vec![(owner as i64).into(), (guild_id as i64).into(), name.into()],
            )
            .await
    }

    pub async fn delete(&self, guild_id: u64, name: &str) -> Result<u64, DbErr> {
        self.db
            .execute(
                "DELETE FROM tags WHERE guild_id = $1 AND tag_name = $2",
                vec![(guild_id as i64).into(), name.into()],
            )
            .await
    }

    /// All tag names of a guild in alphabetical order.
    pub async fn names(&self, guild_id: u64) -> Result<Vec<String>, DbErr> {
        self.db
            .column::<String>(
                "SELECT tag_name FROM tags WHERE guild_id = $1 ORDER BY tag_name",
                vec![(guild_id as i64).into()],
            )
            .await
    }

    pub async fn info(&self, guild_id: u64, name: &str) -> Result<Option<TagInfo>, DbErr> {
        let tag = self
            .db
            .row::<entity::tag::Model>(
                "SELECT guild_id, tag_name, tag_owner, tag_content, uses \
                 FROM tags WHERE guild_id = $1 AND tag_name = $2",
                vec![(guild_id as i64).into(), name.into()],
            )
            .await?;

        Ok(tag.map(TagInfo::from_entity))
    }
}
