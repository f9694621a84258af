//! Guildbot Test Utils
//!
//! Shared testing utilities for the guildbot workspace. Provides a builder for creating
//! test contexts backed by in-memory SQLite databases, factories for inserting fixture
//! rows, and factories for Serenity model objects.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::Tag;
//!
//! #[tokio::test]
//! async fn test_tag_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(Tag)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod serenity;
