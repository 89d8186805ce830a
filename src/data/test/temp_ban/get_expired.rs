use super::*;

/// Tests that only bans past their expiry are returned.
///
/// Expected: Ok with the expired ban only
#[tokio::test]
async fn returns_only_expired_bans() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::TempBan)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    factory::create_temp_ban(db, "111111111", "222222222", now - Duration::hours(1)).await?;
    factory::create_temp_ban(db, "111111111", "333333333", now + Duration::hours(1)).await?;

    let repo = TempBanRepository::new(db);
    let expired = repo.get_expired(now).await?;

    assert_eq!(expired.len(), 1);
    assert_eq!(expired[0].guild_id, 111111111);
    assert_eq!(expired[0].user_id, 222222222);

    Ok(())
}

/// Tests that expired bans come back earliest first.
///
/// Expected: Ok ordered by expires_at ascending
#[tokio::test]
async fn orders_by_expiry() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::TempBan)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    factory::create_temp_ban(db, "111111111", "222222222", now - Duration::hours(1)).await?;
    factory::create_temp_ban(db, "111111111", "333333333", now - Duration::hours(5)).await?;

    let repo = TempBanRepository::new(db);
    let expired = repo.get_expired(now).await?;

    assert_eq!(expired.len(), 2);
    assert_eq!(expired[0].user_id, 333333333);
    assert_eq!(expired[1].user_id, 222222222);

    Ok(())
}

/// Tests the empty case.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_without_bans() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::TempBan)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TempBanRepository::new(db);

    assert!(repo.get_expired(Utc::now()).await?.is_empty());

    Ok(())
}
