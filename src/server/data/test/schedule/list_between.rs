use super::*;

/// Tests range listing with both bounds.
///
/// Verifies `[from, to)` semantics and ascending order.
///
/// Expected: Ok with the two March appointments, soonest first
#[tokio::test]
async fn lists_appointments_in_range_ordered() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_schedule_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    for when in [
        at(2026, 3, 20, 10, 0),
        at(2026, 3, 5, 10, 0),
        at(2026, 4, 1, 10, 0), // outside
    ] {
        factory::schedule_appointment::AppointmentFactory::new(db, user.id)
            .scheduled_at(when)
            .build()
            .await?;
    }

    let repo = ScheduleRepository::new(db);
    let appointments = repo
        .list_between(
            user.id,
            Some(at(2026, 3, 1, 0, 0)),
            Some(at(2026, 4, 1, 0, 0)),
        )
        .await?;

    let times: Vec<_> = appointments
        .iter()
        .map(|appointment| appointment.scheduled_at)
        .collect();

    assert_eq!(times, vec![at(2026, 3, 5, 10, 0), at(2026, 3, 20, 10, 0)]);

    Ok(())
}

/// Tests listing with no bounds.
///
/// Expected: Ok with every appointment of the user
#[tokio::test]
async fn lists_all_without_bounds() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_schedule_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    factory::schedule_appointment::AppointmentFactory::new(db, user.id)
        .build()
        .await?;

    let repo = ScheduleRepository::new(db);
    let appointments = repo.list_between(user.id, None, None).await?;

    assert_eq!(appointments.len(), 1);

    Ok(())
}
