use super::*;

/// Tests creating a record for a day.
///
/// Expected: Ok with all fields stored
#[tokio::test]
async fn creates_record() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_journal_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = EmotionRecordRepository::new(db);
    let record = repo
        .create(
            user.id,
            date(2026, 1, 5),
            "joy".to_string(),
            8,
            Some("좋은 하루".to_string()),
        )
        .await?;

    assert_eq!(record.user_id, user.id);
    assert_eq!(record.record_date, date(2026, 1, 5));
    assert_eq!(record.mood, "joy");
    assert_eq!(record.intensity, 8);
    assert_eq!(record.note, Some("좋은 하루".to_string()));

    Ok(())
}

/// Tests the write-time uniqueness lookup.
///
/// The schema carries no unique index for the one-record-per-day rule; the
/// service enforces it through this existence check.
///
/// Expected: Ok(Some) for the recorded day, Ok(None) for a free day
#[tokio::test]
async fn finds_record_by_user_and_date() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_journal_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    factory::emotion_record::EmotionRecordFactory::new(db, user.id)
        .record_date(date(2026, 1, 5))
        .build()
        .await?;

    let repo = EmotionRecordRepository::new(db);

    let taken = repo.find_by_user_and_date(user.id, date(2026, 1, 5)).await?;
    assert!(taken.is_some());

    let free = repo.find_by_user_and_date(user.id, date(2026, 1, 6)).await?;
    assert!(free.is_none());

    Ok(())
}

/// Tests that the day lookup is scoped per user.
///
/// Expected: Ok(None) for another user's day
#[tokio::test]
async fn day_lookup_is_scoped_to_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_journal_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;

    factory::emotion_record::EmotionRecordFactory::new(db, user.id)
        .record_date(date(2026, 1, 5))
        .build()
        .await?;

    let repo = EmotionRecordRepository::new(db);
    let other_day = repo
        .find_by_user_and_date(other.id, date(2026, 1, 5))
        .await?;

    assert!(other_day.is_none());

    Ok(())
}
