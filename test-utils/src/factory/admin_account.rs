//! Admin account and permission factories.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Creates an admin account. The password hash is an opaque placeholder;
/// login-path tests hash real passwords through the service instead.
pub async fn create_admin(
    db: &DatabaseConnection,
) -> Result<entity::admin_account::Model, DbErr> {
    let id = next_id();

    entity::admin_account::ActiveModel {
        username: ActiveValue::Set(format!("admin_{}", id)),
        password_hash: ActiveValue::Set("$argon2id$placeholder".to_string()),
        display_name: ActiveValue::Set(format!("Admin {}", id)),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}

pub async fn create_permission(
    db: &DatabaseConnection,
    admin_id: i32,
    permission: impl Into<String>,
) -> Result<entity::admin_permission::Model, DbErr> {
    entity::admin_permission::ActiveModel {
        admin_id: ActiveValue::Set(admin_id),
        permission: ActiveValue::Set(permission.into()),
        ..Default::default()
    }
    .insert(db)
    .await
}
