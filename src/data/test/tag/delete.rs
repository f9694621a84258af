use super::*;

/// Tests deleting a tag.
///
/// Expected: one row deleted and the tag gone
#[tokio::test]
async fn deletes_tag() -> Result<(), DbErr> {
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
    let deleted = repo.delete(1, "faq").await?;

    assert_eq!(deleted, 1);
    assert!(repo.owner(1, "faq").await?.is_none());

    Ok(())
}

/// Tests deleting only within the given guild.
///
/// Expected: tag with the same name in another guild survives
#[tokio::test]
async fn keeps_tags_of_other_guilds() -> Result<(), DbErr> {
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
    factory::tag::TagFactory::new(db.connection(), 2)
        .name("faq")
        .build()
        .await?;

    let repo = TagRepository::new(&db);
    repo.delete(1, "faq").await?;

    assert!(repo.owner(2, "faq").await?.is_some());

    Ok(())
}
