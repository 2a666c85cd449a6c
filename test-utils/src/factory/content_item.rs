//! Content item factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

pub async fn create_content(
    db: &DatabaseConnection,
    published: bool,
) -> Result<entity::content_item::Model, DbErr> {
    let id = next_id();

    create_content_with_category(db, format!("content-{}", id), "mindfulness", published).await
}

pub async fn create_content_with_category(
    db: &DatabaseConnection,
    slug: impl Into<String>,
    category: impl Into<String>,
    published: bool,
) -> Result<entity::content_item::Model, DbErr> {
    let id = next_id();
    let now = Utc::now();

    entity::content_item::ActiveModel {
        slug: ActiveValue::Set(slug.into()),
        title: ActiveValue::Set(format!("Content {}", id)),
        body: ActiveValue::Set("# 제목\n\n본문입니다.".to_string()),
        category: ActiveValue::Set(category.into()),
        published: ActiveValue::Set(published),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
}
