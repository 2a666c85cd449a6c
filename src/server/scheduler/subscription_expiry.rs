//! Subscription expiry sweep.
//!
//! Runs hourly, marks active subscriptions past their `expires_at` as
//! expired, and mirrors the status change.

use chrono::Utc;
use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{
    data::{billing::BillingRepository, user::UserRepository},
    error::AppError,
    service::mirror::MirrorService,
};

/// Starts the subscription expiry scheduler.
///
/// # Arguments
/// - `db`: Database connection
/// - `mirror`: Mirror service for propagating status changes
pub async fn start_scheduler(db: DatabaseConnection, mirror: MirrorService) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let job_db = db.clone();
    let job_mirror = mirror.clone();

    // Run at the top of every hour.
    let job = Job::new_async("0 0 * * * *", move |_uuid, _lock| {
        let db = job_db.clone();
        let mirror = job_mirror.clone();

        Box::pin(async move {
            if let Err(e) = process_expired_subscriptions(&db, &mirror).await {
                tracing::error!("Error processing subscription expiry: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Subscription expiry scheduler started");

    Ok(())
}

/// Expires overdue subscriptions and mirrors each status change.
async fn process_expired_subscriptions(
    db: &DatabaseConnection,
    mirror: &MirrorService,
) -> Result<(), AppError> {
    let expired = BillingRepository::new(db).expire_overdue(Utc::now()).await?;

    if expired.is_empty() {
        return Ok(());
    }

    tracing::info!("Expired {} overdue subscription(s)", expired.len());

    let user_repo = UserRepository::new(db);
    for subscription in &expired {
        if let Some(user) = user_repo.find_by_id(subscription.user_id).await? {
            mirror
                .mirror_subscription(&user.uid, &subscription.status, subscription.expires_at)
                .await;
        }
    }

    Ok(())
}
