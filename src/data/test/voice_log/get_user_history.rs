use super::*;

/// Tests that the history respects the limit and ordering.
///
/// Verifies that only `limit` records come back, newest first.
///
/// Expected: Ok with the three newest records in descending order
#[tokio::test]
async fn returns_newest_records_up_to_limit() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_voice_log_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    for minutes in 1..=5 {
        VoiceLogFactory::new(db)
            .user(1, "Alice")
            .guild(99, "Guild")
            .join(minutes as u64, format!("Channel {}", minutes))
            .timestamp(now - Duration::minutes(minutes))
            .build()
            .await?;
    }

    let repo = VoiceLogRepository::new(db);
    let history = repo.get_user_history(1, 99, 3).await?;

    assert_eq!(history.len(), 3);
    assert!(history
        .windows(2)
        .all(|pair| pair[0].timestamp >= pair[1].timestamp));
    assert_eq!(history[0].new_channel_id, Some(1));

    Ok(())
}

/// Tests that other members and guilds are excluded.
///
/// Expected: Ok with only the requested member's records in the requested guild
#[tokio::test]
async fn filters_by_user_and_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_voice_log_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    VoiceLogFactory::new(db)
        .user(1, "Alice")
        .guild(99, "Guild")
        .build()
        .await?;
    VoiceLogFactory::new(db)
        .user(2, "Bob")
        .guild(99, "Guild")
        .build()
        .await?;
    VoiceLogFactory::new(db)
        .user(1, "Alice")
        .guild(98, "Other")
        .build()
        .await?;

    let repo = VoiceLogRepository::new(db);
    let history = repo.get_user_history(1, 99, 10).await?;

    assert_eq!(history.len(), 1);
    assert_eq!(history[0].user_id, 1);
    assert_eq!(history[0].guild_id, 99);

    Ok(())
}
