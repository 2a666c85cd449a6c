//! Chat message factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub async fn create_message(
    db: &DatabaseConnection,
    session_id: i32,
    role: impl Into<String>,
    content: impl Into<String>,
) -> Result<entity::chat_message::Model, DbErr> {
    entity::chat_message::ActiveModel {
        session_id: ActiveValue::Set(session_id),
        role: ActiveValue::Set(role.into()),
        content: ActiveValue::Set(content.into()),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
