use super::*;

/// Tests storing a move between two channels.
///
/// Verifies that every field of the parameters is persisted, snowflakes are stored as
/// strings and the timestamp is assigned at write time.
///
/// Expected: Ok with a `move` record carrying both channels
#[tokio::test]
async fn stores_move_with_both_channels() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_voice_log_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let before = Utc::now();
    let repo = VoiceLogRepository::new(db);
    let log = repo
        .create(CreateVoiceLogParam::new(
            VoiceAction::Move,
            &member(1, "Alice"),
            Some(&channel(10, "Lobby")),
            Some(&channel(20, "Raid")),
            &guild(99),
        ))
        .await?;

    assert_eq!(log.action, VoiceAction::Move);
    assert_eq!(log.user_id, 1);
    assert_eq!(log.username, "Alice");
    assert_eq!(log.previous_channel_id, Some(10));
    assert_eq!(log.previous_channel_name.as_deref(), Some("Lobby"));
    assert_eq!(log.new_channel_id, Some(20));
    assert_eq!(log.new_channel_name.as_deref(), Some("Raid"));
    assert_eq!(log.guild_id, 99);
    assert_eq!(log.guild_name, "Guild 99");
    assert!(log.timestamp >= before);

    let row = entity::prelude::VoiceLog::find_by_id(log.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(row.user_id, "1");
    assert_eq!(row.previous_channel_id.as_deref(), Some("10"));
    assert_eq!(row.action, "move");

    Ok(())
}

/// Tests storing a join.
///
/// Verifies that the previous channel columns stay null for a join.
///
/// Expected: Ok with no previous channel
#[tokio::test]
async fn stores_join_without_previous_channel() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_voice_log_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = VoiceLogRepository::new(db);
    let log = repo
        .create(CreateVoiceLogParam::new(
            VoiceAction::Join,
            &member(1, "Alice"),
            None,
            Some(&channel(10, "Lobby")),
            &guild(99),
        ))
        .await?;

    assert_eq!(log.action, VoiceAction::Join);
    assert!(log.previous_channel_id.is_none());
    assert!(log.previous_channel_name.is_none());
    assert_eq!(log.new_channel_id, Some(10));

    Ok(())
}

/// Tests that records are appended, never merged.
///
/// Verifies that two identical transitions produce two rows with distinct ids.
///
/// Expected: Ok with two rows
#[tokio::test]
async fn appends_identical_transitions() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_voice_log_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = VoiceLogRepository::new(db);
    let param = CreateVoiceLogParam::new(
        VoiceAction::Leave,
        &member(1, "Alice"),
        Some(&channel(10, "Lobby")),
        None,
        &guild(99),
    );

    let first = repo.create(param.clone()).await?;
    let second = repo.create(param).await?;

    assert_ne!(first.id, second.id);
    let rows = entity::prelude::VoiceLog::find().all(db).await?;
    assert_eq!(rows.len(), 2);

    Ok(())
}

/// Tests that a missing table surfaces as a database error.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn fails_without_table() -> Result<(), DbErr> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = VoiceLogRepository::new(db);
    let result = repo
        .create(CreateVoiceLogParam::new(
            VoiceAction::Join,
            &member(1, "Alice"),
            None,
            Some(&channel(10, "Lobby")),
            &guild(99),
        ))
        .await;

    assert!(result.is_err());

    Ok(())
}
