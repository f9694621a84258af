use super::*;

/// Tests fetching a tag's content.
///
/// Expected: content returned and uses incremented by exactly one
#[tokio::test]
async fn returns_content_and_increments_uses() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Tag)
        .build()
        .await
        .unwrap();
    let db = Database::new(test.db.as_ref().unwrap().clone());

    factory::tag::TagFactory::new(db.connection(), 1)
        .name("rules")
        .content("Be nice.")
        .uses(4)
        .build()
        .await?;

    let repo = TagRepository::new(&db);
    let content = repo.get_and_increment(1, "rules").await?;

    assert_eq!(content, Some("Be nice.".to_string()));
    assert_eq!(uses_of(&db, 1, "rules").await?, 5);

    Ok(())
}

/// Tests that repeated gets accumulate.
///
/// Expected: uses equals the number of gets
#[tokio::test]
async fn repeated_gets_accumulate() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Tag)
        .build()
        .await
        .unwrap();
    let db = Database::new(test.db.as_ref().unwrap().clone());

    factory::tag::TagFactory::new(db.connection(), 1)
        .name("faq")
        .build()
        .await?;

    let repo = TagRepository::new(&db);
    for _ in 0..3 {
        repo.get_and_increment(1, "faq").await?;
    }

    assert_eq!(uses_of(&db, 1, "faq").await?, 3);

    Ok(())
}

/// Tests fetching a tag that does not exist.
///
/// Expected: Ok(None) and no counter touched
#[tokio::test]
async fn missing_tag_returns_none() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Tag)
        .build()
        .await
        .unwrap();
    let db = Database::new(test.db.as_ref().unwrap().clone());

    factory::tag::TagFactory::new(db.connection(), 1)
        .name("faq")
        .build()
        .await?;

    let repo = TagRepository::new(&db);

    assert!(repo.get_and_increment(1, "nope").await?.is_none());
    assert_eq!(uses_of(&db, 1, "faq").await?, 0);

    Ok(())
}

/// Tests that tags are scoped per guild.
///
/// Expected: same name in another guild is not found
#[tokio::test]
async fn does_not_cross_guilds() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Tag)
        .build()
        .await
        .unwrap();
    let db = Database::new(test.db.as_ref().unwrap().clone());

    factory::tag::TagFactory::new(db.connection(), 1)
        .name("faq")
        .build()
        .await?;

    let repo = TagRepository::new(&db);

    assert!(repo.get_and_increment(2, "faq").await?.is_none());

    Ok(())
}

/// Tests bumping the counter while reading the owner.
///
/// Expected: owner returned and uses incremented
#[tokio::test]
async fn increment_returning_owner_bumps_uses() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Tag)
        .build()
        .await
        .unwrap();
    let db = Database::new(test.db.as_ref().unwrap().clone());

    factory::tag::TagFactory::new(db.connection(), 1)
        .name("faq")
        .owner(77)
        .build()
        .await?;

    let repo = TagRepository::new(&db);

    assert_eq!(repo.increment_returning_owner(1, "faq").await?, Some(77));
    assert_eq!(uses_of(&db, 1, "faq").await?, 1);
    assert!(repo.increment_returning_owner(1, "nope").await?.is_none());

    Ok(())
}
