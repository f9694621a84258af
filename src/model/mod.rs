//! Domain models passed between the data, service and bot layers.
//!
//! Repositories convert entity models into these types at their boundary so that
//! services and commands work with Discord-shaped ids (`u64`) rather than the signed
//! integers the store uses.

pub mod guild;
pub mod starboard;
pub mod tag;
