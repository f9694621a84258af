//! Database layer.
//!
//! `Database` wraps the sea-orm connection pool and forwards parameterised SQL to it,
//! counting every round trip. Repositories build on top of it and convert rows into
//! domain models at their boundary.

pub mod database;
pub mod guild;
pub mod starboard;
pub mod tag;

pub use database::Database;
pub use guild::GuildRepository;
pub use starboard::StarboardRepository;
pub use tag::TagRepository;

#[cfg(test)]
mod test;
