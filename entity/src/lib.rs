//! SeaORM entity models for the bot's relational store.

pub mod prelude;

pub mod guild;
pub mod starboard;
pub mod tag;
