use super::*;

/// Tests loading every guild row.
///
/// Expected: all guilds with their prefixes and star channels
#[tokio::test]
async fn returns_every_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Guild)
        .build()
        .await
        .unwrap();
    let db = Database::new(test.db.as_ref().unwrap().clone());

    factory::guild::GuildFactory::new(db.connection())
        .guild_id(10)
        .prefix("!")
        .build()
        .await?;
    factory::guild::GuildFactory::new(db.connection())
        .guild_id(20)
        .star_channel(Some(99))
        .build()
        .await?;

    let repo = GuildRepository::new(&db);
    let mut guilds = repo.all().await?;
    guilds.sort_by_key(|g| g.guild_id);

    assert_eq!(guilds.len(), 2);
    assert_eq!(guilds[0].guild_id, 10);
    assert_eq!(guilds[0].prefix, "!");
    assert_eq!(guilds[1].star_channel, Some(99));

    Ok(())
}

/// Tests loading from an empty table.
///
/// Expected: empty vector
#[tokio::test]
async fn returns_empty_when_no_guilds() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Guild)
        .build()
        .await
        .unwrap();
    let db = Database::new(test.db.as_ref().unwrap().clone());

    let repo = GuildRepository::new(&db);

    assert!(repo.all().await?.is_empty());

    Ok(())
}

/// Tests finding a single guild.
///
/// Expected: Some for a stored guild, None otherwise
#[tokio::test]
async fn finds_single_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Guild)
        .build()
        .await
        .unwrap();
    let db = Database::new(test.db.as_ref().unwrap().clone());

    let guild = factory::create_guild(db.connection()).await?;

    let repo = GuildRepository::new(&db);

    let found = repo.find(guild.guild_id as u64).await?;
    assert_eq!(found.map(|g| g.prefix), Some("$".to_string()));
    assert!(repo.find(1).await?.is_none());

    Ok(())
}
