use super::*;

/// Tests inserting a new tag.
///
/// Expected: Ok(true) with zero uses
#[tokio::test]
async fn inserts_new_tag() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Tag)
        .build()
        .await
        .unwrap();
    let db = Database::new(test.db.as_ref().unwrap().clone());

    let repo = TagRepository::new(&db);
    let inserted = repo.insert(1, "hello", 42, "Hello world").await?;

    assert!(inserted);

    let stored = entity::prelude::Tag::find_by_id((1, "hello".to_string()))
        .one(db.connection())
        .await?
        .unwrap();
    assert_eq!(stored.tag_owner, 42);
    assert_eq!(stored.tag_content, "Hello world");
    assert_eq!(stored.uses, 0);

    Ok(())
}

/// Tests inserting over an existing name.
///
/// Expected: Ok(false) and the original row untouched
#[tokio::test]
async fn keeps_existing_tag_on_conflict() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Tag)
        .build()
        .await
        .unwrap();
    let db = Database::new(test.db.as_ref().unwrap().clone());

    factory::tag::TagFactory::new(db.connection(), 1)
        .name("hello")
        .owner(1)
        .content("original")
        .build()
        .await?;

    let repo = TagRepository::new(&db);
    let inserted = repo.insert(1, "hello", 2, "replacement").await?;

    assert!(!inserted);
    assert_eq!(repo.owner(1, "hello").await?, Some(1));

    Ok(())
}

/// Tests that the same name can exist in two guilds.
///
/// Expected: both inserts succeed
#[tokio::test]
async fn same_name_in_other_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Tag)
        .build()
        .await
        .unwrap();
    let db = Database::new(test.db.as_ref().unwrap().clone());

    let repo = TagRepository::new(&db);

    assert!(repo.insert(1, "hello", 1, "a").await?);
    assert!(repo.insert(2, "hello", 1, "b").await?);

    Ok(())
}
