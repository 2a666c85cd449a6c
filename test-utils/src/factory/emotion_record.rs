//! Emotion record factory.
//!
//! Provides a builder pattern for creating emotion record entities with
//! default values that can be overridden for specific test scenarios.

use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test emotion records with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::emotion_record::EmotionRecordFactory;
///
/// let record = EmotionRecordFactory::new(&db, user.id)
///     .record_date(NaiveDate::from_ymd_opt(2026, 1, 5).unwrap())
///     .mood("joy")
///     .intensity(8)
///     .build()
///     .await?;
/// ```
pub struct EmotionRecordFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    record_date: NaiveDate,
    mood: String,
    intensity: i32,
    note: Option<String>,
}

impl<'a> EmotionRecordFactory<'a> {
    /// Creates a new factory with default values.
    ///
    /// Defaults:
    /// - record_date: today (UTC)
    /// - mood: `"calm"`
    /// - intensity: `5`
    /// - note: `Some("Test note")`
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        Self {
            db,
            user_id,
            record_date: Utc::now().date_naive(),
            mood: "calm".to_string(),
            intensity: 5,
            note: Some("Test note".to_string()),
        }
    }

    pub fn record_date(mut self, record_date: NaiveDate) -> Self {
        self.record_date = record_date;
        self
    }

    pub fn mood(mut self, mood: impl Into<String>) -> Self {
        self.mood = mood.into();
        self
    }

    pub fn intensity(mut self, intensity: i32) -> Self {
        self.intensity = intensity;
        self
    }

    pub fn note(mut self, note: Option<String>) -> Self {
        self.note = note;
        self
    }

    pub async fn build(self) -> Result<entity::emotion_record::Model, DbErr> {
        let now = Utc::now();

        entity::emotion_record::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            record_date: ActiveValue::Set(self.record_date),
            mood: ActiveValue::Set(self.mood),
            intensity: ActiveValue::Set(self.intensity),
            note: ActiveValue::Set(self.note),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}
