use crate::{cache::GuildCache, data::Database, error::AppError};
use test_utils::{builder::TestBuilder, factory};


/// Builds a wrapped in-memory database with every bot table.
async fn setup() -> Result<Database, AppError> {
    let test = TestBuilder::new()
        .with_bot_tables()
        .build()
        .await
        .unwrap();

    Ok(Database::new(test.db.as_ref().unwrap().clone()))
}
