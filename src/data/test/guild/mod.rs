use crate::data::{guild::GuildRepository, Database};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod all;
mod insert_if_missing;
mod prefix;
mod star_channel;
