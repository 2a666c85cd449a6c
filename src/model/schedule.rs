use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct RecurrenceDto {
    /// "weekly" or "monthly".
    pub frequency: String,
    /// ISO weekday numbers (1 = Monday .. 7 = Sunday); weekly rules only.
    pub weekdays: Option<Vec<u8>>,
    /// Days of month (1..31); monthly rules only.
    pub month_days: Option<Vec<u32>>,
    /// Every N weeks/months; defaults to 1.
    pub interval: Option<u32>,
    /// Total occurrences to generate; defaults to 10, capped at 100.
    pub count: Option<u32>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateAppointmentDto {
    pub title: String,
    pub memo: Option<String>,
    /// Format: "YYYY-MM-DD HH:MM" in UTC
    pub scheduled_at: String,
    pub recurrence: Option<RecurrenceDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdateAppointmentDto {
    pub title: Option<String>,
    pub memo: Option<String>,
    /// Format: "YYYY-MM-DD HH:MM" in UTC
    pub scheduled_at: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct AppointmentDto {
    pub id: i32,
    pub title: String,
    pub memo: Option<String>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub scheduled_at: DateTime<Utc>,
    pub recurrence_group_id: Option<String>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: DateTime<Utc>,
}

/// Result of an appointment create. A single create returns one appointment
/// and no group id; a recurring create returns every generated occurrence,
/// the shared group id, and the dates that were skipped because the user
/// already had an appointment at that time.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateAppointmentResultDto {
    pub appointments: Vec<AppointmentDto>,
    pub recurrence_group_id: Option<String>,
    pub skipped_dates: Vec<String>,
}
