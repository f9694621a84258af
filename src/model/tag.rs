//! Domain models for guild tags.

/// Names that collide with `tag` subcommands and can never be used as tag names.
pub const RESERVED_TAG_NAMES: [&str; 7] =
    ["create", "delete", "edit", "info", "list", "transfer", "get"];

/// Summary returned by `tag info`.
#[derive(Debug, Clone, PartialEq)]
pub struct TagInfo {
    pub name: String,
    pub owner: u64,
    /// Length of the content in characters.
    pub content_length: usize,
    pub uses: i32,
}

impl TagInfo {
    pub fn from_entity(entity: entity::tag::Model) -> Self {
        Self {
            content_length: entity.tag_content.chars().count(),
            name: entity.tag_name,
            owner: entity.tag_owner as u64,
            uses: entity.uses,
        }
    }
}

/// Result of `tag create`.
#[derive(Debug, Clone, PartialEq)]
pub enum CreateOutcome {
    Created,
    /// Name is one of `RESERVED_TAG_NAMES`.
    Reserved,
    /// A tag with this name already exists; its use counter was bumped.
    AlreadyExists { owner: u64 },
}

/// Result of an owner-gated mutation (`edit`, `transfer`, `delete`).
#[derive(Debug, Clone, PartialEq)]
pub enum TagMutation {
    Applied,
    /// Requester does not own the tag. Nothing was written.
    NotOwner { owner: u64 },
    Missing,
}

/// Answer to the "create it now?" prompt of `tag edit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Accepted,
    Declined,
    TimedOut,
}

impl Confirmation {
    /// Interprets the follow-up message, `None` meaning no reply arrived in time.
    ///
    /// Any reply starting with `y` or `Y` counts as a yes.
    pub fn from_reply(reply: Option<&str>) -> Self {
        match reply {
            None => Confirmation::TimedOut,
            Some(content) if content.trim_start().starts_with(['y', 'Y']) => {
                Confirmation::Accepted
            }
            Some(_) => Confirmation::Declined,
        }
    }
}
