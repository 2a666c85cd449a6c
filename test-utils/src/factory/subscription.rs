//! Subscription factory.

use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an active subscription expiring 30 days from now.
pub async fn create_active_subscription(
    db: &DatabaseConnection,
    user_id: i32,
    plan_id: i32,
) -> Result<entity::subscription::Model, DbErr> {
    let now = Utc::now();

    create_subscription(db, user_id, plan_id, "active", Some(now), Some(now + Duration::days(30)))
        .await
}

pub async fn create_subscription(
    db: &DatabaseConnection,
    user_id: i32,
    plan_id: i32,
    status: impl Into<String>,
    started_at: Option<DateTime<Utc>>,
    expires_at: Option<DateTime<Utc>>,
) -> Result<entity::subscription::Model, DbErr> {
    entity::subscription::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        plan_id: ActiveValue::Set(plan_id),
        status: ActiveValue::Set(status.into()),
        started_at: ActiveValue::Set(started_at),
        expires_at: ActiveValue::Set(expires_at),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
