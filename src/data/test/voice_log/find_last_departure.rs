use super::*;

/// Tests that the newest departure wins.
///
/// Verifies that among several leave/move records out of the same channel the one with
/// the latest timestamp is returned, regardless of insertion order.
///
/// Expected: Ok(Some) with the newest departure
#[tokio::test]
async fn returns_most_recent_departure() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_voice_log_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    VoiceLogFactory::new(db)
        .user(1, "Alice")
        .guild(99, "Guild")
        .leave(10, "Lobby")
        .timestamp(now - Duration::minutes(30))
        .build()
        .await?;
    VoiceLogFactory::new(db)
        .user(2, "Bob")
        .guild(99, "Guild")
        .moved((10, "Lobby"), (20, "Raid"))
        .timestamp(now - Duration::minutes(5))
        .build()
        .await?;
    VoiceLogFactory::new(db)
        .user(3, "Carol")
        .guild(99, "Guild")
        .leave(10, "Lobby")
        .timestamp(now - Duration::minutes(15))
        .build()
        .await?;

    let repo = VoiceLogRepository::new(db);
    let result = repo.find_last_departure(10, 99).await?;

    let log = result.unwrap();
    assert_eq!(log.username, "Bob");
    assert_eq!(log.action, VoiceAction::Move);
    assert_eq!(log.new_channel_name.as_deref(), Some("Raid"));

    Ok(())
}

/// Tests that joins into the channel are not departures.
///
/// Verifies the join A then move A to B scenario: A's last departure is the move and B has
/// no departure at all.
///
/// Expected: Ok(Some) for A, Ok(None) for B
#[tokio::test]
async fn ignores_joins_and_arrivals() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_voice_log_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    VoiceLogFactory::new(db)
        .user(1, "Alice")
        .guild(99, "Guild")
        .join(10, "A")
        .timestamp(now - Duration::minutes(2))
        .build()
        .await?;
    let moved = VoiceLogFactory::new(db)
        .user(1, "Alice")
        .guild(99, "Guild")
        .moved((10, "A"), (20, "B"))
        .timestamp(now - Duration::minutes(1))
        .build()
        .await?;

    let repo = VoiceLogRepository::new(db);

    let from_a = repo.find_last_departure(10, 99).await?.unwrap();
    assert_eq!(from_a.id, moved.id);
    assert_eq!(from_a.action, VoiceAction::Move);

    assert!(repo.find_last_departure(20, 99).await?.is_none());

    Ok(())
}

/// Tests that departures are scoped to the guild.
///
/// Expected: Ok(None) for a guild with no matching record
#[tokio::test]
async fn scopes_to_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_voice_log_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    VoiceLogFactory::new(db)
        .guild(1, "Other Guild")
        .leave(10, "Lobby")
        .build()
        .await?;

    let repo = VoiceLogRepository::new(db);

    assert!(repo.find_last_departure(10, 2).await?.is_none());
    assert!(repo.find_last_departure(10, 1).await?.is_some());

    Ok(())
}

/// Tests tie-breaking on equal timestamps.
///
/// Verifies that the record with the higher id wins when timestamps are identical.
///
/// Expected: Ok(Some) with the later inserted record
#[tokio::test]
async fn breaks_timestamp_ties_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_voice_log_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let at = Utc::now() - Duration::minutes(1);
    VoiceLogFactory::new(db)
        .user(1, "Alice")
        .guild(99, "Guild")
        .leave(10, "Lobby")
        .timestamp(at)
        .build()
        .await?;
    let second = VoiceLogFactory::new(db)
        .user(2, "Bob")
        .guild(99, "Guild")
        .leave(10, "Lobby")
        .timestamp(at)
        .build()
        .await?;

    let repo = VoiceLogRepository::new(db);
    let log = repo.find_last_departure(10, 99).await?.unwrap();

    assert_eq!(log.id, second.id);

    Ok(())
}

/// Tests an empty log.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_empty_log() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_voice_log_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = VoiceLogRepository::new(db);

    assert!(repo.find_last_departure(10, 99).await?.is_none());

    Ok(())
}
