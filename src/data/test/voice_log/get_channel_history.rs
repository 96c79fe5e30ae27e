use super::*;

/// Tests that arrivals and departures both count.
///
/// Verifies that a channel's history includes records where it was the previous channel
/// and records where it was the new channel, but not unrelated channels.
///
/// Expected: Ok with the join and the move, newest first
#[tokio::test]
async fn matches_previous_or_new_channel() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_voice_log_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    VoiceLogFactory::new(db)
        .guild(99, "Guild")
        .join(10, "Lobby")
        .timestamp(now - Duration::minutes(3))
        .build()
        .await?;
    VoiceLogFactory::new(db)
        .guild(99, "Guild")
        .moved((10, "Lobby"), (20, "Raid"))
        .timestamp(now - Duration::minutes(2))
        .build()
        .await?;
    VoiceLogFactory::new(db)
        .guild(99, "Guild")
        .join(30, "AFK")
        .timestamp(now - Duration::minutes(1))
        .build()
        .await?;

    let repo = VoiceLogRepository::new(db);
    let history = repo.get_channel_history(10, 99, 20).await?;

    assert_eq!(history.len(), 2);
    assert_eq!(history[0].action, VoiceAction::Move);
    assert_eq!(history[1].action, VoiceAction::Join);

    let raid = repo.get_channel_history(20, 99, 20).await?;
    assert_eq!(raid.len(), 1);

    Ok(())
}

/// Tests the limit on channel history.
///
/// Expected: Ok with exactly `limit` records
#[tokio::test]
async fn respects_limit() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_voice_log_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..4 {
        VoiceLogFactory::new(db)
            .guild(99, "Guild")
            .leave(10, "Lobby")
            .build()
            .await?;
    }

    let repo = VoiceLogRepository::new(db);
    let history = repo.get_channel_history(10, 99, 2).await?;

    assert_eq!(history.len(), 2);

    Ok(())
}
