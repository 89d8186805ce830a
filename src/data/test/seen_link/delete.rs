use super::*;

/// Tests deleting a video removes it for every user.
///
/// Expected: Ok(2) and no rows left for the video
#[tokio::test]
async fn deletes_video_for_all_users() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::SeenLink)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user1 = factory::create_user_with_id(db, "111111111").await?;
    let user2 = factory::create_user_with_id(db, "222222222").await?;
    factory::create_seen_link(db, &user1.discord_id, "dqw4w9wgxcq").await?;
    factory::create_seen_link(db, &user2.discord_id, "dqw4w9wgxcq").await?;

    let repo = SeenLinkRepository::new(db);
    let removed = repo.delete("dqw4w9wgxcq").await?;

    assert_eq!(removed, 2);
    assert!(repo.exists(111111111, "dqw4w9wgxcq").await?.is_none());
    assert!(repo.exists(222222222, "dqw4w9wgxcq").await?.is_none());

    Ok(())
}

/// Tests that deleting one video leaves other videos in place.
///
/// Expected: Ok with the other video still recorded
#[tokio::test]
async fn leaves_other_videos() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::SeenLink)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user_with_id(db, "123456789").await?;
    factory::create_seen_link(db, &user.discord_id, "aaaaaaaaaaa").await?;
    factory::create_seen_link(db, &user.discord_id, "bbbbbbbbbbb").await?;

    let repo = SeenLinkRepository::new(db);
    repo.delete("aaaaaaaaaaa").await?;

    assert!(repo.exists(123456789, "bbbbbbbbbbb").await?.is_some());

    Ok(())
}

/// Tests deleting a video nobody posted.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_unknown_video() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::SeenLink)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SeenLinkRepository::new(db);
    let result = repo.delete("dqw4w9wgxcq").await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
