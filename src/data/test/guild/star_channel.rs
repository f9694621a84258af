use super::*;

/// Tests that new guilds have no star channel.
///
/// Expected: Ok(None)
#[tokio::test]
async fn defaults_to_none() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Guild)
        .build()
        .await
        .unwrap();
    let db = Database::new(test.db.as_ref().unwrap().clone());

    let repo = GuildRepository::new(&db);
    repo.insert_if_missing(5).await?;

    assert!(repo.star_channel(5).await?.is_none());

    Ok(())
}

/// Tests storing a star channel.
///
/// Expected: channel id readable after the update
#[tokio::test]
async fn stores_star_channel() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Guild)
        .build()
        .await
        .unwrap();
    let db = Database::new(test.db.as_ref().unwrap().clone());

    let repo = GuildRepository::new(&db);
    repo.insert_if_missing(5).await?;

    let updated = repo.set_star_channel(5, 825219011796533250).await?;

    assert_eq!(updated, 1);
    assert_eq!(repo.star_channel(5).await?, Some(825219011796533250));

    Ok(())
}
