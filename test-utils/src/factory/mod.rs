//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` struct for customization and a
//! `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let guild = factory::create_guild(&db).await?;
//!     let tag = factory::tag::TagFactory::new(&db, guild.guild_id)
//!         .name("rules")
//!         .owner(42)
//!         .build()
//!         .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Available Factories
//!
//! - `guild` - Create guild configuration rows
//! - `tag` - Create tag rows
//! - `starboard` - Create starboard entries
//! - `helpers` - Unique id generation shared by all factories

pub mod guild;
pub mod helpers;
pub mod starboard;
pub mod tag;

pub use guild::create_guild;
pub use starboard::create_starboard_entry;
pub use tag::create_tag;
