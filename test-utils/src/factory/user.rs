//! User factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Creates a user with generated UID and nickname.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    let id = next_id();

    create_user_with_uid(db, format!("uid_{}", id)).await
}

/// Creates a user with a specific UID.
pub async fn create_user_with_uid(
    db: &DatabaseConnection,
    uid: impl Into<String>,
) -> Result<entity::user::Model, DbErr> {
    let id = next_id();

    entity::user::ActiveModel {
        uid: ActiveValue::Set(uid.into()),
        email: ActiveValue::Set(Some(format!("user{}@example.com", id))),
        nickname: ActiveValue::Set(format!("User {}", id)),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
