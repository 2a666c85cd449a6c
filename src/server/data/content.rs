//! Content item repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

pub struct ContentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ContentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets published items, optionally restricted to a category, newest
    /// update first.
    pub async fn list_published(
        &self,
        category: Option<&str>,
    ) -> Result<Vec<entity::content_item::Model>, DbErr> {
        let mut query = entity::prelude::ContentItem::find()
            .filter(entity::content_item::Column::Published.eq(true));

        if let Some(category) = category {
            query = query.filter(entity::content_item::Column::Category.eq(category));
        }

        query
            .order_by_desc(entity::content_item::Column::UpdatedAt)
            .all(self.db)
            .await
    }

    pub async fn find_by_slug(
        &self,
        slug: &str,
    ) -> Result<Option<entity::content_item::Model>, DbErr> {
        entity::prelude::ContentItem::find()
            .filter(entity::content_item::Column::Slug.eq(slug))
            .one(self.db)
            .await
    }

    pub async fn list_all(&self) -> Result<Vec<entity::content_item::Model>, DbErr> {
        entity::prelude::ContentItem::find()
            .order_by_desc(entity::content_item::Column::UpdatedAt)
            .all(self.db)
            .await
    }

    pub async fn create(
        &self,
        slug: String,
        title: String,
        body: String,
        category: String,
        published: bool,
    ) -> Result<entity::content_item::Model, DbErr> {
        let now = Utc::now();

        entity::content_item::ActiveModel {
            slug: ActiveValue::Set(slug),
            title: ActiveValue::Set(title),
            body: ActiveValue::Set(body),
            category: ActiveValue::Set(category),
            published: ActiveValue::Set(published),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Updates item fields; `None` leaves a field unchanged. `updated_at` is
    /// always refreshed.
    pub async fn update(
        &self,
        item: entity::content_item::Model,
        title: Option<String>,
        body: Option<String>,
        category: Option<String>,
        published: Option<bool>,
    ) -> Result<entity::content_item::Model, DbErr> {
        let mut active = item.into_active_model();

        if let Some(title) = title {
            active.title = ActiveValue::Set(title);
        }
        if let Some(body) = body {
            active.body = ActiveValue::Set(body);
        }
        if let Some(category) = category {
            active.category = ActiveValue::Set(category);
        }
        if let Some(published) = published {
            active.published = ActiveValue::Set(published);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        active.update(self.db).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::ContentItem::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
