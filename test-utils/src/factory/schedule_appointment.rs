//! Schedule appointment factory.
//!
//! Provides a builder pattern for creating appointment entities with default
//! values that can be overridden for specific test scenarios.

use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test appointments with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::schedule_appointment::AppointmentFactory;
///
/// let appointment = AppointmentFactory::new(&db, user.id)
///     .title("Therapy")
///     .recurrence_group_id(Some("group-1".to_string()))
///     .build()
///     .await?;
/// ```
pub struct AppointmentFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    title: String,
    memo: Option<String>,
    scheduled_at: DateTime<Utc>,
    recurrence_group_id: Option<String>,
}

impl<'a> AppointmentFactory<'a> {
    /// Creates a new factory with default values.
    ///
    /// Defaults:
    /// - title: `"Appointment {id}"` where id is auto-incremented
    /// - memo: `Some("Test memo")`
    /// - scheduled_at: 1 hour from now
    /// - recurrence_group_id: `None`
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        let id = next_id();

        Self {
            db,
            user_id,
            title: format!("Appointment {}", id),
            memo: Some("Test memo".to_string()),
            scheduled_at: Utc::now() + Duration::hours(1),
            recurrence_group_id: None,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn memo(mut self, memo: Option<String>) -> Self {
        self.memo = memo;
        self
    }

    pub fn scheduled_at(mut self, scheduled_at: DateTime<Utc>) -> Self {
        self.scheduled_at = scheduled_at;
        self
    }

    pub fn recurrence_group_id(mut self, group_id: Option<String>) -> Self {
        self.recurrence_group_id = group_id;
        self
    }

    pub async fn build(self) -> Result<entity::schedule_appointment::Model, DbErr> {
        entity::schedule_appointment::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            title: ActiveValue::Set(self.title),
            memo: ActiveValue::Set(self.memo),
            scheduled_at: ActiveValue::Set(self.scheduled_at),
            recurrence_group_id: ActiveValue::Set(self.recurrence_group_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}
