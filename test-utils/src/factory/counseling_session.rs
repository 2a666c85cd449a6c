//! Counseling session factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Creates a session with the "empathetic" persona.
pub async fn create_session(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::counseling_session::Model, DbErr> {
    create_session_with_persona(db, user_id, "empathetic").await
}

pub async fn create_session_with_persona(
    db: &DatabaseConnection,
    user_id: i32,
    persona: impl Into<String>,
) -> Result<entity::counseling_session::Model, DbErr> {
    let id = next_id();

    entity::counseling_session::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        persona: ActiveValue::Set(persona.into()),
        title: ActiveValue::Set(Some(format!("Session {}", id))),
        started_at: ActiveValue::Set(Utc::now()),
        last_message_at: ActiveValue::Set(None),
        ..Default::default()
    }
    .insert(db)
    .await
}
