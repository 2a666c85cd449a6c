use super::*;

/// Tests creating a payment order.
///
/// Expected: Ok in "ready" state with the stored amount
#[tokio::test]
async fn creates_ready_payment() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_billing_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let plan = factory::subscription_plan::create_plan(db, 9900, 30).await?;

    let repo = BillingRepository::new(db);
    let subscription = repo.create_pending_subscription(user.id, plan.id).await?;
    let payment = repo
        .create_payment(user.id, subscription.id, "maum-123".to_string(), 9900)
        .await?;

    assert_eq!(payment.status, "ready");
    assert_eq!(payment.amount, 9900);
    assert!(payment.payment_key.is_none());
    assert!(payment.confirmed_at.is_none());

    Ok(())
}

/// Tests order id lookup.
///
/// Expected: Ok(Some) for a known order, Ok(None) otherwise
#[tokio::test]
async fn finds_payment_by_order_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_billing_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _plan, subscription) = factory::helpers::create_user_with_subscription(db).await?;
    let payment =
        factory::payment::create_ready_payment(db, user.id, subscription.id, 9900).await?;

    let repo = BillingRepository::new(db);

    let found = repo.find_payment_by_order_id(&payment.order_id).await?;
    assert_eq!(found.map(|payment| payment.id), Some(payment.id));

    assert!(repo.find_payment_by_order_id("missing").await?.is_none());

    Ok(())
}

/// Tests the confirm transition.
///
/// Expected: Ok with status "confirmed", key and timestamp stored
#[tokio::test]
async fn marks_payment_confirmed() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_billing_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _plan, subscription) = factory::helpers::create_user_with_subscription(db).await?;
    let payment =
        factory::payment::create_ready_payment(db, user.id, subscription.id, 9900).await?;

    let repo = BillingRepository::new(db);
    let now = Utc::now();
    let confirmed = repo
        .mark_payment_confirmed(payment, "key_abc".to_string(), now)
        .await?;

    assert_eq!(confirmed.status, "confirmed");
    assert_eq!(confirmed.payment_key, Some("key_abc".to_string()));
    assert_eq!(confirmed.confirmed_at, Some(now));

    Ok(())
}

/// Tests the failure transition.
///
/// Expected: Ok with status "failed" and no key stored
#[tokio::test]
async fn marks_payment_failed() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_billing_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _plan, subscription) = factory::helpers::create_user_with_subscription(db).await?;
    let payment =
        factory::payment::create_ready_payment(db, user.id, subscription.id, 9900).await?;

    let repo = BillingRepository::new(db);
    let failed = repo.mark_payment_failed(payment).await?;

    assert_eq!(failed.status, "failed");
    assert!(failed.payment_key.is_none());

    Ok(())
}
