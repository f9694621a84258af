use super::*;

/// Tests reading tag details.
///
/// Expected: owner, content length and uses without incrementing
#[tokio::test]
async fn returns_tag_details() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Tag)
        .build()
        .await
        .unwrap();
    let db = Database::new(test.db.as_ref().unwrap().clone());

    factory::tag::TagFactory::new(db.connection(), 1)
        .name("faq")
        .owner(9)
        .content("twelve chars")
        .uses(3)
        .build()
        .await?;

    let repo = TagRepository::new(&db);
    let info = repo.info(1, "faq").await?.unwrap();

    assert_eq!(info.name, "faq");
    assert_eq!(info.owner, 9);
    assert_eq!(info.content_length, 12);
    assert_eq!(info.uses, 3);
    assert_eq!(uses_of(&db, 1, "faq").await?, 3);

    Ok(())
}

/// Tests reading details of a missing tag.
///
/// Expected: Ok(None)
#[tokio::test]
async fn missing_tag_has_no_info() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Tag)
        .build()
        .await
        .unwrap();
    let db = Database::new(test.db.as_ref().unwrap().clone());

    let repo = TagRepository::new(&db);

    assert!(repo.info(1, "faq").await?.is_none());

    Ok(())
}
