use super::*;

/// Tests creating a pending subscription.
///
/// Expected: Ok with pending status and no period set
#[tokio::test]
async fn creates_pending_subscription() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_billing_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let plan = factory::subscription_plan::create_plan(db, 9900, 30).await?;

    let repo = BillingRepository::new(db);
    let subscription = repo.create_pending_subscription(user.id, plan.id).await?;

    assert_eq!(subscription.status, "pending");
    assert!(subscription.started_at.is_none());
    assert!(subscription.expires_at.is_none());

    Ok(())
}

/// Tests activation.
///
/// Expected: Ok with active status and the period stamped
#[tokio::test]
async fn activates_subscription() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_billing_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let plan = factory::subscription_plan::create_plan(db, 9900, 30).await?;

    let repo = BillingRepository::new(db);
    let subscription = repo.create_pending_subscription(user.id, plan.id).await?;

    let now = Utc::now();
    let activated = repo
        .activate_subscription(subscription, now, now + Duration::days(30))
        .await?;

    assert_eq!(activated.status, "active");
    assert_eq!(activated.started_at, Some(now));
    assert_eq!(activated.expires_at, Some(now + Duration::days(30)));

    Ok(())
}

/// Tests the latest-subscription-with-plan lookup.
///
/// Expected: Ok with the newest subscription and its plan joined
#[tokio::test]
async fn finds_latest_subscription_with_plan() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_billing_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let plan = factory::subscription_plan::create_plan(db, 9900, 30).await?;
    factory::subscription::create_subscription(db, user.id, plan.id, "expired", None, None).await?;
    let latest =
        factory::subscription::create_active_subscription(db, user.id, plan.id).await?;

    let repo = BillingRepository::new(db);
    let found = repo.find_latest_subscription_with_plan(user.id).await?;

    let (subscription, joined_plan) = found.expect("subscription expected");
    assert_eq!(subscription.id, latest.id);
    assert_eq!(joined_plan.map(|plan| plan.id), Some(plan.id));

    Ok(())
}

/// Tests cancellation.
///
/// Verifies that the period stamps survive the status change, so paid
/// access can run until its end.
///
/// Expected: Ok with status "canceled" and dates intact
#[tokio::test]
async fn cancels_subscription_keeping_period() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_billing_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, _plan, subscription) = factory::helpers::create_user_with_subscription(db).await?;
    let expires_at = subscription.expires_at;

    let repo = BillingRepository::new(db);
    let canceled = repo.cancel_subscription(subscription).await?;

    assert_eq!(canceled.status, "canceled");
    assert_eq!(canceled.expires_at, expires_at);

    Ok(())
}

/// Tests the expiry sweep.
///
/// Verifies that only active subscriptions past their expiry transition;
/// future ones and already-expired ones are untouched.
///
/// Expected: Ok with exactly the overdue subscription expired
#[tokio::test]
async fn expires_only_overdue_subscriptions() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_billing_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let plan = factory::subscription_plan::create_plan(db, 9900, 30).await?;

    let now = Utc::now();
    let overdue = factory::subscription::create_subscription(
        db,
        user.id,
        plan.id,
        "active",
        Some(now - Duration::days(31)),
        Some(now - Duration::days(1)),
    )
    .await?;
    let current = factory::subscription::create_subscription(
        db,
        user.id,
        plan.id,
        "active",
        Some(now),
        Some(now + Duration::days(29)),
    )
    .await?;

    let repo = BillingRepository::new(db);
    let expired = repo.expire_overdue(now).await?;

    assert_eq!(expired.len(), 1);
    assert_eq!(expired[0].id, overdue.id);
    assert_eq!(expired[0].status, "expired");

    let untouched = repo.find_subscription_by_id(current.id).await?.unwrap();
    assert_eq!(untouched.status, "active");

    Ok(())
}
