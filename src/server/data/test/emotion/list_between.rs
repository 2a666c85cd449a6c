use super::*;

/// Tests the month-range listing.
///
/// Verifies that only records inside `[from, to)` are returned, in date
/// order.
///
/// Expected: Ok with the January records only, ascending
#[tokio::test]
async fn lists_records_in_range_date_ordered() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_journal_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    for day in [20, 3, 11] {
        factory::emotion_record::EmotionRecordFactory::new(db, user.id)
            .record_date(date(2026, 1, day))
            .build()
            .await?;
    }
    // Outside the range
    factory::emotion_record::EmotionRecordFactory::new(db, user.id)
        .record_date(date(2026, 2, 1))
        .build()
        .await?;

    let repo = EmotionRecordRepository::new(db);
    let records = repo
        .list_between(user.id, date(2026, 1, 1), date(2026, 2, 1))
        .await?;

    let days: Vec<u32> = records
        .iter()
        .map(|record| chrono::Datelike::day(&record.record_date))
        .collect();

    assert_eq!(days, vec![3, 11, 20]);

    Ok(())
}

/// Tests that another user's records never leak into the listing.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn excludes_other_users_records() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_journal_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;

    factory::emotion_record::EmotionRecordFactory::new(db, other.id)
        .record_date(date(2026, 1, 5))
        .build()
        .await?;

    let repo = EmotionRecordRepository::new(db);
    let records = repo
        .list_between(user.id, date(2026, 1, 1), date(2026, 2, 1))
        .await?;

    assert!(records.is_empty());

    Ok(())
}
