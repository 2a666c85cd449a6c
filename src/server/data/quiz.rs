//! Quiz and quiz result repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

pub struct QuizRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> QuizRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<entity::quiz::Model>, DbErr> {
        entity::prelude::Quiz::find()
            .order_by_asc(entity::quiz::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn find_by_slug(&self, slug: &str) -> Result<Option<entity::quiz::Model>, DbErr> {
        entity::prelude::Quiz::find()
            .filter(entity::quiz::Column::Slug.eq(slug))
            .one(self.db)
            .await
    }

    pub async fn create_result(
        &self,
        user_id: i32,
        quiz_id: i32,
        result_type: String,
        answers: serde_json::Value,
    ) -> Result<entity::quiz_result::Model, DbErr> {
        entity::quiz_result::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            quiz_id: ActiveValue::Set(quiz_id),
            result_type: ActiveValue::Set(result_type),
            answers: ActiveValue::Set(answers),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets a user's results newest first, each paired with its quiz.
    pub async fn list_results_with_quiz(
        &self,
        user_id: i32,
    ) -> Result<Vec<(entity::quiz_result::Model, Option<entity::quiz::Model>)>, DbErr> {
        entity::prelude::QuizResult::find()
            .filter(entity::quiz_result::Column::UserId.eq(user_id))
            .find_also_related(entity::prelude::Quiz)
            .order_by_desc(entity::quiz_result::Column::Id)
            .all(self.db)
            .await
    }
}
