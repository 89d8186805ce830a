use super::*;

/// Tests the full escalation ladder for one user reposting one video.
///
/// Verifies each step: first post recorded, second post times out for 3 hours,
/// third kicks, fourth bans for 7 days and resets the count and the video record.
///
/// Expected: Ok with outcomes and Discord calls matching each tier
#[tokio::test]
async fn escalates_through_every_tier() -> Result<(), AppError> {
    let test = TestBuilder::new().with_moderation_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let actions = RecordingActions::new();
    let config = moderated_channel();

    let service = ModerationService::new(db, &actions, &config);
    let user_repo = UserRepository::new(db);
    let seen_link_repo = SeenLinkRepository::new(db);

    // First post
    let outcome = service.handle_message(&message(1, VIDEO_URL)).await?;
    assert!(matches!(outcome, MessageOutcome::FirstSighting { .. }));
    assert_eq!(user_repo.get_violations(AUTHOR_ID).await?, Some(0));

    // Second post: timeout
    let before = Utc::now();
    let report = expect_offense(service.handle_message(&message(2, VIDEO_URL)).await?);
    let after = Utc::now();

    assert_eq!(report.violations, 1);
    assert_eq!(
        report.action,
        Some(PunitiveAction::Timeout {
            duration: Duration::hours(3)
        })
    );
    assert!(report.action_applied);
    assert!(report.message_deleted);
    assert!(!report.reset);
    assert_eq!(user_repo.get_violations(AUTHOR_ID).await?, Some(1));

    let calls = actions.calls();
    assert_eq!(
        calls[0],
        ActionCall::DeleteMessage {
            channel_id: CHANNEL_ID,
            message_id: 2
        }
    );
    match &calls[1] {
        ActionCall::Timeout {
            guild_id,
            user_id,
            until,
        } => {
            assert_eq!(*guild_id, GUILD_ID);
            assert_eq!(*user_id, AUTHOR_ID);
            assert!(*until >= before + Duration::hours(3));
            assert!(*until <= after + Duration::hours(3));
        }
        other => panic!("expected timeout, got {:?}", other),
    }

    // Third post: kick
    let report = expect_offense(service.handle_message(&message(3, VIDEO_URL)).await?);

    assert_eq!(report.violations, 2);
    assert_eq!(
        report.action,
        Some(PunitiveAction::Kick {
            reason: KICK_REASON
        })
    );
    assert!(!report.reset);
    assert_eq!(
        actions.calls()[3],
        ActionCall::Kick {
            guild_id: GUILD_ID,
            user_id: AUTHOR_ID,
            reason: KICK_REASON.to_string()
        }
    );

    // Fourth post: ban and reset
    let report = expect_offense(service.handle_message(&message(4, VIDEO_URL)).await?);

    assert_eq!(report.violations, 3);
    assert!(matches!(report.action, Some(PunitiveAction::Ban { .. })));
    assert!(report.action_applied);
    assert!(report.reset);
    assert_eq!(
        actions.calls()[5],
        ActionCall::Ban {
            guild_id: GUILD_ID,
            user_id: AUTHOR_ID,
            reason: BAN_REASON.to_string(),
            delete_message_days: 7
        }
    );
    assert_eq!(user_repo.get_violations(AUTHOR_ID).await?, Some(0));
    assert!(seen_link_repo.exists(AUTHOR_ID, VIDEO_ID).await?.is_none());

    assert_eq!(
        actions.kinds(),
        vec![
            ActionKind::DeleteMessage,
            ActionKind::Timeout,
            ActionKind::DeleteMessage,
            ActionKind::Kick,
            ActionKind::DeleteMessage,
            ActionKind::Ban,
        ]
    );

    Ok(())
}

/// Tests that a successful ban records when it should be lifted.
///
/// Expected: Ok with one temp ban expiring about 7 days from now
#[tokio::test]
async fn records_temp_ban_after_ban() -> Result<(), AppError> {
    let test = TestBuilder::new().with_moderation_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .discord_id(AUTHOR_ID.to_string())
        .violation_count(2)
        .build()
        .await?;
    factory::create_seen_link(db, &user.discord_id, VIDEO_ID).await?;

    let actions = RecordingActions::new();
    let config = moderated_channel();

    let before = Utc::now();
    let service = ModerationService::new(db, &actions, &config);
    let report = expect_offense(service.handle_message(&message(9, VIDEO_URL)).await?);
    let after = Utc::now();

    assert_eq!(report.violations, 3);

    let bans = entity::prelude::TempBan::find().all(db).await?;
    assert_eq!(bans.len(), 1);
    assert_eq!(bans[0].guild_id, GUILD_ID.to_string());
    assert_eq!(bans[0].user_id, AUTHOR_ID.to_string());
    assert_eq!(bans[0].reason, BAN_REASON);
    assert!(bans[0].expires_at >= before + Duration::days(7) - Duration::seconds(1));
    assert!(bans[0].expires_at <= after + Duration::days(7) + Duration::seconds(1));

    Ok(())
}

/// Tests a repost by a user whose count is already past the ban tier.
///
/// Expected: Ok with no punishment, message deleted, count and video cleared
#[tokio::test]
async fn only_cleans_up_beyond_ban_tier() -> Result<(), AppError> {
    let test = TestBuilder::new().with_moderation_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .discord_id(AUTHOR_ID.to_string())
        .violation_count(3)
        .build()
        .await?;
    factory::create_seen_link(db, &user.discord_id, VIDEO_ID).await?;

    let actions = RecordingActions::new();
    let config = moderated_channel();

    let service = ModerationService::new(db, &actions, &config);
    let report = expect_offense(service.handle_message(&message(9, VIDEO_URL)).await?);

    assert_eq!(report.violations, 4);
    assert_eq!(report.action, None);
    assert!(!report.action_applied);
    assert!(report.message_deleted);
    assert!(report.reset);
    assert_eq!(actions.kinds(), vec![ActionKind::DeleteMessage]);

    assert_eq!(UserRepository::new(db).get_violations(AUTHOR_ID).await?, Some(0));
    assert!(SeenLinkRepository::new(db)
        .exists(AUTHOR_ID, VIDEO_ID)
        .await?
        .is_none());
    assert_eq!(entity::prelude::TempBan::find().count(db).await?, 0);

    Ok(())
}
