//! Subscription plan factory.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

pub async fn create_plan(
    db: &DatabaseConnection,
    price_krw: i32,
    period_days: i32,
) -> Result<entity::subscription_plan::Model, DbErr> {
    let id = next_id();

    create_plan_with_code(db, format!("plan-{}", id), price_krw, period_days).await
}

pub async fn create_plan_with_code(
    db: &DatabaseConnection,
    code: impl Into<String>,
    price_krw: i32,
    period_days: i32,
) -> Result<entity::subscription_plan::Model, DbErr> {
    let id = next_id();

    entity::subscription_plan::ActiveModel {
        code: ActiveValue::Set(code.into()),
        name: ActiveValue::Set(format!("Plan {}", id)),
        price_krw: ActiveValue::Set(price_krw),
        period_days: ActiveValue::Set(period_days),
        description: ActiveValue::Set(None),
        ..Default::default()
    }
    .insert(db)
    .await
}
