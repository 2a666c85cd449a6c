use super::*;

/// Tests creating a single appointment.
///
/// Expected: Ok with fields stored and no recurrence group
#[tokio::test]
async fn creates_single_appointment() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_schedule_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = ScheduleRepository::new(db);
    let appointment = repo
        .create(CreateAppointmentParams {
            user_id: user.id,
            title: "상담 예약".to_string(),
            memo: Some("온라인".to_string()),
            scheduled_at: at(2026, 3, 10, 14, 0),
            recurrence_group_id: None,
        })
        .await?;

    assert_eq!(appointment.user_id, user.id);
    assert_eq!(appointment.title, "상담 예약");
    assert_eq!(appointment.scheduled_at, at(2026, 3, 10, 14, 0));
    assert!(appointment.recurrence_group_id.is_none());

    Ok(())
}

/// Tests creating series members with a shared group id.
///
/// Expected: Ok with both rows carrying the group id
#[tokio::test]
async fn creates_series_members_with_group_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_schedule_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let repo = ScheduleRepository::new(db);

    for day in [10, 17] {
        repo.create(CreateAppointmentParams {
            user_id: user.id,
            title: "명상 모임".to_string(),
            memo: None,
            scheduled_at: at(2026, 3, day, 9, 0),
            recurrence_group_id: Some("group-1".to_string()),
        })
        .await?;
    }

    let members = repo.list_group(user.id, "group-1").await?;
    assert_eq!(members.len(), 2);

    Ok(())
}
