pub use super::guild::Entity as Guild;
pub use super::starboard::Entity as Starboard;
pub use super::tag::Entity as Tag;
