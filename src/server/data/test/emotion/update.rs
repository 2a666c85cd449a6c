use super::*;

/// Tests updating a record's fields.
///
/// Verifies that Some values overwrite, None values leave fields untouched,
/// and `updated_at` moves forward.
///
/// Expected: Ok with mood changed, note preserved
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_journal_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let record = factory::emotion_record::EmotionRecordFactory::new(db, user.id)
        .record_date(date(2026, 1, 5))
        .mood("anxiety")
        .note(Some("원래 메모".to_string()))
        .build()
        .await?;

    let created_at = record.created_at;

    let repo = EmotionRecordRepository::new(db);
    let updated = repo
        .update(record, Some("calm".to_string()), Some(3), None)
        .await?;

    assert_eq!(updated.mood, "calm");
    assert_eq!(updated.intensity, 3);
    assert_eq!(updated.note, Some("원래 메모".to_string()));
    assert!(updated.updated_at >= created_at);

    Ok(())
}
