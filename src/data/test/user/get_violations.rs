use super::*;

/// Tests reading the count of a known user.
///
/// Expected: Ok(Some(count))
#[tokio::test]
async fn returns_stored_count() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .discord_id("123456789")
        .violation_count(2)
        .build()
        .await?;

    let repo = UserRepository::new(db);

    assert_eq!(repo.get_violations(123456789).await?, Some(2));

    Ok(())
}

/// Tests reading the count of a user that was never seen.
///
/// The lookup must not create the user; initialization is left to the caller.
///
/// Expected: Ok(None) and no row inserted
#[tokio::test]
async fn returns_none_without_creating_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    assert_eq!(repo.get_violations(123456789).await?, None);
    assert!(repo.find_by_id(123456789).await?.is_none());

    Ok(())
}

/// Tests that a negative stored count is rejected.
///
/// Expected: Err(AppError::InternalError)
#[tokio::test]
async fn fails_for_negative_count() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .discord_id("123456789")
        .violation_count(-1)
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let result = repo.get_violations(123456789).await;

    assert!(matches!(result, Err(AppError::InternalError(_))));

    Ok(())
}
