use super::*;

/// Tests reading the owner without side effects.
///
/// Expected: owner returned, uses unchanged
#[tokio::test]
async fn reads_owner_without_incrementing() -> Result<(), DbErr> {
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

    assert_eq!(repo.owner(1, "faq").await?, Some(77));
    assert!(repo.owner(1, "nope").await?.is_none());
    assert_eq!(uses_of(&db, 1, "faq").await?, 0);

    Ok(())
}
