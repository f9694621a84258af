use super::*;

/// Tests recording the cross-post of a starred message.
///
/// Expected: star_message_id stored on the entry
#[tokio::test]
async fn records_star_message() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Starboard)
        .build()
        .await
        .unwrap();
    let db = Database::new(test.db.as_ref().unwrap().clone());

    let entry = factory::create_starboard_entry(db.connection(), 1).await?;
    let base_message_id = entry.base_message_id as u64;

    let repo = StarboardRepository::new(&db);
    let updated = repo.set_star_message(base_message_id, 2000).await?;

    assert_eq!(updated, 1);
    assert_eq!(
        repo.entry(base_message_id).await?.unwrap().star_message_id,
        Some(2000)
    );

    Ok(())
}

/// Tests reading an unknown message.
///
/// Expected: Ok(None)
#[tokio::test]
async fn unknown_message_has_no_entry() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Starboard)
        .build()
        .await
        .unwrap();
    let db = Database::new(test.db.as_ref().unwrap().clone());

    let repo = StarboardRepository::new(&db);

    assert!(repo.entry(1).await?.is_none());

    Ok(())
}
