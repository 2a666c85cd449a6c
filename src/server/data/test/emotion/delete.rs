use super::*;

/// Tests deleting a record.
///
/// Expected: Ok with the day free again afterwards
#[tokio::test]
async fn deletes_record() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_journal_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let record = factory::emotion_record::EmotionRecordFactory::new(db, user.id)
        .record_date(date(2026, 1, 5))
        .build()
        .await?;

    let repo = EmotionRecordRepository::new(db);
    repo.delete(record.id).await?;

    let gone = repo.find_by_user_and_date(user.id, date(2026, 1, 5)).await?;
    assert!(gone.is_none());

    Ok(())
}
