use super::*;

/// Tests series cancellation by group id.
///
/// Verifies that every member of the group goes away while unrelated
/// appointments survive.
///
/// Expected: Ok(2) deleted, standalone appointment untouched
#[tokio::test]
async fn deletes_whole_group_only() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_schedule_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    for day in [10, 17] {
        factory::schedule_appointment::AppointmentFactory::new(db, user.id)
            .scheduled_at(at(2026, 3, day, 9, 0))
            .recurrence_group_id(Some("group-1".to_string()))
            .build()
            .await?;
    }
    let standalone = factory::schedule_appointment::AppointmentFactory::new(db, user.id)
        .build()
        .await?;

    let repo = ScheduleRepository::new(db);
    let deleted = repo.delete_group(user.id, "group-1").await?;

    assert_eq!(deleted, 2);
    assert!(repo.list_group(user.id, "group-1").await?.is_empty());
    assert!(repo
        .find_by_id_for_user(user.id, standalone.id)
        .await?
        .is_some());

    Ok(())
}

/// Tests that group deletion is scoped to the owner.
///
/// Expected: Ok(0) when another user tries the same group id
#[tokio::test]
async fn group_deletion_is_scoped_to_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_schedule_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let intruder = factory::user::create_user(db).await?;

    factory::schedule_appointment::AppointmentFactory::new(db, owner.id)
        .recurrence_group_id(Some("group-1".to_string()))
        .build()
        .await?;

    let repo = ScheduleRepository::new(db);
    let deleted = repo.delete_group(intruder.id, "group-1").await?;

    assert_eq!(deleted, 0);
    assert_eq!(repo.list_group(owner.id, "group-1").await?.len(), 1);

    Ok(())
}
