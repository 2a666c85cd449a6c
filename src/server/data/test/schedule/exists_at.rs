use super::*;

/// Tests the duplicate-timestamp probe backing the recurrence skip.
///
/// Expected: true for the occupied timestamp, false otherwise and for other
/// users
#[tokio::test]
async fn detects_existing_appointment_at_timestamp() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_schedule_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;

    let when = at(2026, 3, 10, 14, 0);
    factory::schedule_appointment::AppointmentFactory::new(db, user.id)
        .scheduled_at(when)
        .build()
        .await?;

    let repo = ScheduleRepository::new(db);

    assert!(repo.exists_at(user.id, when).await?);
    assert!(!repo.exists_at(user.id, when + Duration::minutes(30)).await?);
    assert!(!repo.exists_at(other.id, when).await?);

    Ok(())
}
