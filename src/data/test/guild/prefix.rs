use super::*;

/// Tests reading the prefix of an unknown guild.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Guild)
        .build()
        .await
        .unwrap();
    let db = Database::new(test.db.as_ref().unwrap().clone());

    let repo = GuildRepository::new(&db);

    assert!(repo.prefix(42).await?.is_none());

    Ok(())
}

/// Tests updating the prefix of a stored guild.
///
/// Expected: one row updated and the new prefix readable
#[tokio::test]
async fn updates_prefix() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Guild)
        .build()
        .await
        .unwrap();
    let db = Database::new(test.db.as_ref().unwrap().clone());

    let guild = factory::create_guild(db.connection()).await?;
    let guild_id = guild.guild_id as u64;

    let repo = GuildRepository::new(&db);
    let updated = repo.set_prefix(guild_id, ">>").await?;

    assert_eq!(updated, 1);
    assert_eq!(repo.prefix(guild_id).await?, Some(">>".to_string()));

    Ok(())
}

/// Tests updating the prefix of a guild without a row.
///
/// Expected: zero rows updated
#[tokio::test]
async fn update_of_unknown_guild_touches_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Guild)
        .build()
        .await
        .unwrap();
    let db = Database::new(test.db.as_ref().unwrap().clone());

    let repo = GuildRepository::new(&db);

    assert_eq!(repo.set_prefix(42, "!").await?, 0);
    assert!(repo.prefix(42).await?.is_none());

    Ok(())
}
