//! Service layer for business logic.
//!
//! Services sit between the bot commands and the repositories. They apply the rules
//! around guild configuration, tags and the starboard, and wrap the third-party HTTP
//! APIs used by auxiliary commands.

pub mod cat;
pub mod guild;
pub mod piston;
pub mod starboard;
pub mod tag;

#[cfg(test)]
mod test;
