use super::*;

/// Tests inserting a guild seen for the first time.
///
/// Expected: Ok(true) with the default prefix stored
#[tokio::test]
async fn inserts_new_guild_with_default_prefix() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Guild)
        .build()
        .await
        .unwrap();
    let db = Database::new(test.db.as_ref().unwrap().clone());

    let repo = GuildRepository::new(&db);
    let inserted = repo.insert_if_missing(123456789).await?;

    assert!(inserted);

    let stored = entity::prelude::Guild::find_by_id(123456789)
        .one(db.connection())
        .await?
        .unwrap();
    assert_eq!(stored.prefix, "$");
    assert!(stored.star_channel.is_none());

    Ok(())
}

/// Tests that a known guild keeps its configuration.
///
/// Expected: Ok(false) and the custom prefix untouched
#[tokio::test]
async fn leaves_existing_guild_untouched() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Guild)
        .build()
        .await
        .unwrap();
    let db = Database::new(test.db.as_ref().unwrap().clone());

    factory::guild::GuildFactory::new(db.connection())
        .guild_id(123456789)
        .prefix("!")
        .build()
        .await?;

    let repo = GuildRepository::new(&db);
    let inserted = repo.insert_if_missing(123456789).await?;

    assert!(!inserted);
    assert_eq!(repo.prefix(123456789).await?, Some("!".to_string()));

    Ok(())
}

/// Tests batch insertion skipping guilds that already exist.
///
/// Expected: only the unknown guilds are created
#[tokio::test]
async fn batch_inserts_only_missing_guilds() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Guild)
        .build()
        .await
        .unwrap();
    let db = Database::new(test.db.as_ref().unwrap().clone());

    factory::guild::GuildFactory::new(db.connection())
        .guild_id(1)
        .build()
        .await?;

    let repo = GuildRepository::new(&db);
    let created = repo.insert_many_if_missing(&[1, 2, 3]).await?;

    assert_eq!(created, 2);
    assert_eq!(repo.all().await?.len(), 3);

    Ok(())
}

/// Tests that an empty batch sends nothing.
///
/// Expected: Ok(0) without touching the call counter
#[tokio::test]
async fn empty_batch_is_skipped() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Guild)
        .build()
        .await
        .unwrap();
    let db = Database::new(test.db.as_ref().unwrap().clone());

    let repo = GuildRepository::new(&db);

    assert_eq!(repo.insert_many_if_missing(&[]).await?, 0);
    assert_eq!(db.calls(), 0);

    Ok(())
}
