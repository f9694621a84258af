//! Tag lifecycle: absent, created, edited or transferred by the owner, deleted.
//!
//! Names are lowercased before every store access so lookups are case-insensitive.
//! Ownership is a plain equality check against the stored owner.

use crate::{
    data::{Database, TagRepository},
    error::AppError,
    model::tag::{CreateOutcome, TagInfo, TagMutation, RESERVED_TAG_NAMES},
};

pub struct TagService<'a> {
    db: &'a Database,
}

/// Lowercases a tag name for storage and lookup.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

pub fn is_reserved(name: &str) -> bool {
    RESERVED_TAG_NAMES.contains(&normalize_name(name).as_str())
}

impl<'a> TagService<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Returns a tag's content and counts the use. A miss writes nothing.
    pub async fn get(&self, guild_id: u64, name: &str) -> Result<Option<String>, AppError> {
        let name = normalize_name(name);

        Ok(TagRepository::new(self.db)
            .get_and_increment(guild_id, &name)
            .await?)
    }

    /// Creates a tag owned by `owner`.
    ///
    /// Reserved names are rejected before touching the store. Creating over an existing
    /// name counts as a use of that tag and reports its owner.
    pub async fn create(
        &self,
        guild_id: u64,
        name: &str,
        owner: u64,
        content: &str,
    ) -> Result<CreateOutcome, AppError> {
        let name = normalize_name(name);

        if is_reserved(&name) {
            return Ok(CreateOutcome::Reserved);
        }

        let repo = TagRepository::new(self.db);

        if let Some(existing) = repo.increment_returning_owner(guild_id, &name).await? {
            return Ok(CreateOutcome::AlreadyExists { owner: existing });
        }

        if repo.insert(guild_id, &name, owner, content).await? {
            tracing::debug!("Created tag {:?} in guild {}", name, guild_id);
            Ok(CreateOutcome::Created)
        } else {
            // Lost a race with a concurrent create of the same name.
            let owner = repo.owner(guild_id, &name).await?.unwrap_or(owner);
            Ok(CreateOutcome::AlreadyExists { owner })
        }
    }

    /// Replaces a tag's content when `requester` owns it.
    pub async fn edit(
        &self,
        guild_id: u64,
        name: &str,
        requester: u64,
        content: &str,
    ) -> Result<TagMutation, AppError> {
        let name = normalize_name(name);
        let repo = TagRepository::new(self.db);

        match repo.owner(guild_id, &name).await? {
            None => Ok(TagMutation::Missing),
            Some(owner) if owner != requester => Ok(TagMutation::NotOwner { owner }),
            Some(_) => {
                repo.update_content(guild_id, &name, content).await?;
                Ok(TagMutation::Applied)
            }
        }
    }

    /// Hands a tag over to `new_owner` when `requester` owns it.
    pub async fn transfer(
        &self,
        guild_id: u64,
        name: &str,
        requester: u64,
        new_owner: u64,
    ) -> Result<TagMutation, AppError> {
        let name = normalize_name(name);
        let repo = TagRepository::new(self.db);

        match repo.owner(guild_id, &name).await? {
            None => Ok(TagMutation::Missing),
            Some(owner) if owner != requester => Ok(TagMutation::NotOwner { owner }),
            Some(_) => {
                repo.update_owner(guild_id, &name, new_owner).await?;
                Ok(TagMutation::Applied)
            }
        }
    }

    pub async fn delete(
        &self,
        guild_id: u64,
        name: &str,
        requester: u64,
    ) -> Result<TagMutation, AppError> {
        let name = normalize_name(name);
        let repo = TagRepository::new(self.db);

        match repo.owner(guild_id, &name).await? {
            None => Ok(TagMutation::Missing),
            Some(owner) if owner != requester => Ok(TagMutation::NotOwner { owner }),
            Some(_) => {
                repo.delete(guild_id, &name).await?;
                Ok(TagMutation::Applied)
            }
        }
    }

    pub async fn info(&self, guild_id: u64, name: &str) -> Result<Option<TagInfo>, AppError> {
        let name = normalize_name(name);

        Ok(TagRepository::new(self.db).info(guild_id, &name).await?)
    }

    pub async fn list(&self, guild_id: u64) -> Result<Vec<String>, AppError> {
        Ok(TagRepository::new(self.db).names(guild_id).await?)
    }
}
