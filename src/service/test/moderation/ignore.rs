use super::*;

/// Tests that bot authors are never moderated.
///
/// Expected: Ok(Ignored(BotAuthor)) with no records created
#[tokio::test]
async fn ignores_bot_author() -> Result<(), AppError> {
    let test = TestBuilder::new().with_moderation_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let actions = RecordingActions::new();
    let config = moderated_channel();

    let service = ModerationService::new(db, &actions, &config);
    let bot_message = IncomingMessage {
        author_is_bot: true,
        ..message(1, VIDEO_URL)
    };

    for _ in 0..2 {
        let outcome = service.handle_message(&bot_message).await?;
        assert_eq!(outcome, MessageOutcome::Ignored(IgnoreReason::BotAuthor));
    }

    assert!(actions.calls().is_empty());
    assert_eq!(entity::prelude::User::find().count(db).await?, 0);
    assert_eq!(entity::prelude::SeenLink::find().count(db).await?, 0);

    Ok(())
}

/// Tests that messages outside the moderated channel are ignored.
///
/// Expected: Ok(Ignored(OtherChannel)) with no records created
#[tokio::test]
async fn ignores_other_channel() -> Result<(), AppError> {
    let test = TestBuilder::new().with_moderation_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let actions = RecordingActions::new();
    let config = moderated_channel();

    let service = ModerationService::new(db, &actions, &config);
    let elsewhere = IncomingMessage {
        channel_id: CHANNEL_ID + 1,
        ..message(1, VIDEO_URL)
    };

    let outcome = service.handle_message(&elsewhere).await?;

    assert_eq!(outcome, MessageOutcome::Ignored(IgnoreReason::OtherChannel));
    assert_eq!(entity::prelude::User::find().count(db).await?, 0);
    assert_eq!(entity::prelude::SeenLink::find().count(db).await?, 0);

    Ok(())
}

/// Tests that direct messages are ignored.
///
/// Expected: Ok(Ignored(NotInGuild))
#[tokio::test]
async fn ignores_direct_message() -> Result<(), AppError> {
    let test = TestBuilder::new().with_moderation_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let actions = RecordingActions::new();
    let config = ModerationConfig::default();

    let service = ModerationService::new(db, &actions, &config);
    let direct = IncomingMessage {
        guild_id: None,
        ..message(1, VIDEO_URL)
    };

    let outcome = service.handle_message(&direct).await?;

    assert_eq!(outcome, MessageOutcome::Ignored(IgnoreReason::NotInGuild));
    assert_eq!(entity::prelude::User::find().count(db).await?, 0);

    Ok(())
}

/// Tests that messages without a video link leave no trace.
///
/// The user record is only created once a link is found.
///
/// Expected: Ok(Ignored(NoLink)) with no records created
#[tokio::test]
async fn ignores_message_without_link() -> Result<(), AppError> {
    let test = TestBuilder::new().with_moderation_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let actions = RecordingActions::new();
    let config = moderated_channel();

    let service = ModerationService::new(db, &actions, &config);
    let outcome = service
        .handle_message(&message(1, "see https://example.com/watch?v=abc"))
        .await?;

    assert_eq!(outcome, MessageOutcome::Ignored(IgnoreReason::NoLink));
    assert_eq!(entity::prelude::User::find().count(db).await?, 0);

    Ok(())
}
