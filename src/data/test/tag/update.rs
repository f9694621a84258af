use super::*;

/// Tests replacing a tag's content.
///
/// Expected: one row updated with the new content
#[tokio::test]
async fn updates_content() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Tag)
        .build()
        .await
        .unwrap();
    let db = Database::new(test.db.as_ref().unwrap().clone());

    factory::tag::TagFactory::new(db.connection(), 1)
        .name("faq")
        .content("old")
        .build()
        .await?;

    let repo = TagRepository::new(&db);
    let updated = repo.update_content(1, "faq", "new").await?;

    assert_eq!(updated, 1);
    assert_eq!(
        repo.get_and_increment(1, "faq").await?,
        Some("new".to_string())
    );

    Ok(())
}

/// Tests reassigning a tag's owner.
///
/// Expected: one row updated with the new owner
#[tokio::test]
async fn updates_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Tag)
        .build()
        .await
        .unwrap();
    let db = Database::new(test.db.as_ref().unwrap().clone());

    factory::tag::TagFactory::new(db.connection(), 1)
        .name("faq")
        .owner(1)
        .build()
        .await?;

    let repo = TagRepository::new(&db);
    let updated = repo.update_owner(1, "faq", 2).await?;

    assert_eq!(updated, 1);
    assert_eq!(repo.owner(1, "faq").await?, Some(2));

    Ok(())
}

/// Tests updating a tag that does not exist.
///
/// Expected: zero rows updated
#[tokio::test]
async fn update_of_missing_tag_touches_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Tag)
        .build()
        .await
        .unwrap();
    let db = Database::new(test.db.as_ref().unwrap().clone());

    let repo = TagRepository::new(&db);

    assert_eq!(repo.update_content(1, "nope", "x").await?, 0);
    assert_eq!(repo.update_owner(1, "nope", 2).await?, 0);

    Ok(())
}
