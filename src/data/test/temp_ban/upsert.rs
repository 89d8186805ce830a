use super::*;

/// Tests recording a new temp ban.
///
/// Expected: Ok with the stored expiry and reason
#[tokio::test]
async fn creates_temp_ban() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::TempBan)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let expires_at = Utc::now() + Duration::days(7);

    let repo = TempBanRepository::new(db);
    let ban = repo.upsert(111111111, 222222222, expires_at, "reposting").await?;

    assert_eq!(ban.guild_id, 111111111);
    assert_eq!(ban.user_id, 222222222);
    assert_eq!(ban.reason, "reposting");

    Ok(())
}

/// Tests banning a user again before the first ban expired.
///
/// Expected: Ok with a single row carrying the later expiry
#[tokio::test]
async fn replaces_existing_ban() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::TempBan)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();

    let repo = TempBanRepository::new(db);
    repo.upsert(111111111, 222222222, now + Duration::days(1), "first")
        .await?;
    repo.upsert(111111111, 222222222, now + Duration::days(7), "second")
        .await?;

    let count = entity::prelude::TempBan::find().count(db).await?;
    assert_eq!(count, 1);

    // Only the second ban's expiry has passed by day 8
    let expired = repo.get_expired(now + Duration::days(2)).await?;
    assert!(expired.is_empty());

    let expired = repo.get_expired(now + Duration::days(8)).await?;
    assert_eq!(expired.len(), 1);
    assert_eq!(expired[0].reason, "second");

    Ok(())
}
