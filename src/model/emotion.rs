use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateEmotionRecordDto {
    /// Calendar day of the record, "YYYY-MM-DD".
    pub record_date: NaiveDate,
    /// One of "joy", "sadness", "anger", "anxiety", "calm".
    pub mood: String,
    /// Intensity from 1 to 10.
    pub intensity: i32,
    pub note: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdateEmotionRecordDto {
    pub mood: Option<String>,
    pub intensity: Option<i32>,
    pub note: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct EmotionRecordDto {
    pub id: i32,
    pub record_date: NaiveDate,
    pub mood: String,
    pub intensity: i32,
    pub note: Option<String>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub updated_at: DateTime<Utc>,
}
