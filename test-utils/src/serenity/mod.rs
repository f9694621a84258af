//! Test factories for creating Serenity API objects.
//!
//! These factories create valid Serenity structs by deserializing JSON, simulating what
//! Discord's API would return.
//!
//! # Available Factories
//!
//! - `user::create_test_user` - Create Serenity User objects

pub mod user;

pub use user::create_test_user;
