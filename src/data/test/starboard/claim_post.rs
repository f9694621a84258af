use super::*;

/// Tests claiming the cross-post of a message without one.
///
/// Expected: first claim wins, later claims fail, entry reads as not yet posted
#[tokio::test]
async fn claims_post_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Starboard)
        .build()
        .await
        .unwrap();
    let db = Database::new(test.db.as_ref().unwrap().clone());

    let entry = factory::create_starboard_entry(db.connection(), 1).await?;
    let base_message_id = entry.base_message_id as u64;

    let repo = StarboardRepository::new(&db);

    assert!(repo.claim_post(base_message_id).await?);
    assert!(!repo.claim_post(base_message_id).await?);
    assert_eq!(repo.entry(base_message_id).await?.unwrap().star_message_id, None);

    Ok(())
}

/// Tests claiming a message that is already cross-posted.
///
/// Expected: Ok(false) and the recorded cross-post kept
#[tokio::test]
async fn posted_message_cannot_be_claimed() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Starboard)
        .build()
        .await
        .unwrap();
    let db = Database::new(test.db.as_ref().unwrap().clone());

    let entry = factory::create_starboard_entry(db.connection(), 1).await?;
    let base_message_id = entry.base_message_id as u64;

    let repo = StarboardRepository::new(&db);
    repo.set_star_message(base_message_id, 2000).await?;

    assert!(!repo.claim_post(base_message_id).await?);
    assert_eq!(repo.release_post(base_message_id).await?, 0);
    assert_eq!(
        repo.entry(base_message_id).await?.unwrap().star_message_id,
        Some(2000)
    );

    Ok(())
}

/// Tests releasing a pending claim.
///
/// Expected: the message can be claimed again
#[tokio::test]
async fn released_claim_can_be_taken_again() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Starboard)
        .build()
        .await
        .unwrap();
    let db = Database::new(test.db.as_ref().unwrap().clone());

    let entry = factory::create_starboard_entry(db.connection(), 1).await?;
    let base_message_id = entry.base_message_id as u64;

    let repo = StarboardRepository::new(&db);
    repo.claim_post(base_message_id).await?;

    assert_eq!(repo.release_post(base_message_id).await?, 1);
    assert!(repo.claim_post(base_message_id).await?);

    Ok(())
}
