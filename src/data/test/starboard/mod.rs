use crate::data::{starboard::StarboardRepository, Database};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod claim_post;
mod entry;
mod upsert_star;
