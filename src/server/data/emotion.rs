//! Emotion record repository.
//!
//! One row per user per calendar day. The uniqueness rule is enforced here
//! at write time through `find_by_user_and_date`; the schema carries no
//! unique index for it.

use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

pub struct EmotionRecordRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EmotionRecordRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        user_id: i32,
        record_date: NaiveDate,
        mood: String,
        intensity: i32,
        note: Option<String>,
    ) -> Result<entity::emotion_record::Model, DbErr> {
        let now = Utc::now();

        entity::emotion_record::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            record_date: ActiveValue::Set(record_date),
            mood: ActiveValue::Set(mood),
            intensity: ActiveValue::Set(intensity),
            note: ActiveValue::Set(note),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_user_and_date(
        &self,
        user_id: i32,
        record_date: NaiveDate,
    ) -> Result<Option<entity::emotion_record::Model>, DbErr> {
        entity::prelude::EmotionRecord::find()
            .filter(entity::emotion_record::Column::UserId.eq(user_id))
            .filter(entity::emotion_record::Column::RecordDate.eq(record_date))
            .one(self.db)
            .await
    }

    /// Gets all records for a user with `from <= record_date < to`,
    /// date-ordered.
    pub async fn list_between(
        &self,
        user_id: i32,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<entity::emotion_record::Model>, DbErr> {
        entity::prelude::EmotionRecord::find()
            .filter(entity::emotion_record::Column::UserId.eq(user_id))
            .filter(entity::emotion_record::Column::RecordDate.gte(from))
            .filter(entity::emotion_record::Column::RecordDate.lt(to))
            .order_by_asc(entity::emotion_record::Column::RecordDate)
            .all(self.db)
            .await
    }

    /// Updates mood, intensity, and note; `None` leaves a field unchanged.
    /// `updated_at` is always refreshed.
    pub async fn update(
        &self,
        record: entity::emotion_record::Model,
        mood: Option<String>,
        intensity: Option<i32>,
        note: Option<String>,
    ) -> Result<entity::emotion_record::Model, DbErr> {
        let mut active = record.into_active_model();

        if let Some(mood) = mood {
            active.mood = ActiveValue::Set(mood);
        }
        if let Some(intensity) = intensity {
            active.intensity = ActiveValue::Set(intensity);
        }
        if let Some(note) = note {
            active.note = ActiveValue::Set(Some(note));
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        active.update(self.db).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::EmotionRecord::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
