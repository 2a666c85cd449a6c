//! Payment factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Creates a payment in "ready" state awaiting confirmation.
pub async fn create_ready_payment(
    db: &DatabaseConnection,
    user_id: i32,
    subscription_id: i32,
    amount: i32,
) -> Result<entity::payment::Model, DbErr> {
    let id = next_id();

    entity::payment::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        subscription_id: ActiveValue::Set(Some(subscription_id)),
        order_id: ActiveValue::Set(format!("order-{}", id)),
        payment_key: ActiveValue::Set(None),
        amount: ActiveValue::Set(amount),
        status: ActiveValue::Set("ready".to_string()),
        created_at: ActiveValue::Set(Utc::now()),
        confirmed_at: ActiveValue::Set(None),
        ..Default::default()
    }
    .insert(db)
    .await
}
