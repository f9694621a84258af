use super::*;

/// Tests the first star on a message.
///
/// Expected: entry created with one star
#[tokio::test]
async fn first_star_creates_entry() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Starboard)
        .build()
        .await
        .unwrap();
    let db = Database::new(test.db.as_ref().unwrap().clone());

    let repo = StarboardRepository::new(&db);
    let stars = repo.upsert_star(1000, 1).await?;

    assert_eq!(stars, 1);

    let entry = repo.entry(1000).await?.unwrap();
    assert_eq!(entry.guild_id, 1);
    assert!(entry.star_message_id.is_none());

    Ok(())
}

/// Tests further stars on a starred message.
///
/// Expected: counter incremented on conflict
#[tokio::test]
async fn later_stars_increment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Starboard)
        .build()
        .await
        .unwrap();
    let db = Database::new(test.db.as_ref().unwrap().clone());

    factory::starboard::StarboardFactory::new(db.connection(), 1)
        .base_message_id(1000)
        .stars(4)
        .build()
        .await?;

    let repo = StarboardRepository::new(&db);

    assert_eq!(repo.upsert_star(1000, 1).await?, 5);
    assert_eq!(repo.upsert_star(1000, 1).await?, 6);

    Ok(())
}
