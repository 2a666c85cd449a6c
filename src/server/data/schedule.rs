//! Schedule appointment repository.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::schedule::CreateAppointmentParams;

pub struct ScheduleRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ScheduleRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        params: CreateAppointmentParams,
    ) -> Result<entity::schedule_appointment::Model, DbErr> {
        entity::schedule_appointment::ActiveModel {
            user_id: ActiveValue::Set(params.user_id),
            title: ActiveValue::Set(params.title),
            memo: ActiveValue::Set(params.memo),
            scheduled_at: ActiveValue::Set(params.scheduled_at),
            recurrence_group_id: ActiveValue::Set(params.recurrence_group_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id_for_user(
        &self,
        user_id: i32,
        id: i32,
    ) -> Result<Option<entity::schedule_appointment::Model>, DbErr> {
        entity::prelude::ScheduleAppointment::find_by_id(id)
            .filter(entity::schedule_appointment::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }

    /// Lists appointments in `[from, to)`, soonest first. Either bound may be
    /// absent.
    pub async fn list_between(
        &self,
        user_id: i32,
        from: Option<DateTime<Utc>>,
        to: Option<DateTime<Utc>>,
    ) -> Result<Vec<entity::schedule_appointment::Model>, DbErr> {
        let mut query = entity::prelude::ScheduleAppointment::find()
            .filter(entity::schedule_appointment::Column::UserId.eq(user_id));

        if let Some(from) = from {
            query = query.filter(entity::schedule_appointment::Column::ScheduledAt.gte(from));
        }
        if let Some(to) = to {
            query = query.filter(entity::schedule_appointment::Column::ScheduledAt.lt(to));
        }

        query
            .order_by_asc(entity::schedule_appointment::Column::ScheduledAt)
            .all(self.db)
            .await
    }

    /// Whether the user already has an appointment at exactly this time.
    /// Backs the duplicate-date skip of the recurrence generator.
    pub async fn exists_at(&self, user_id: i32, at: DateTime<Utc>) -> Result<bool, DbErr> {
        let count = entity::prelude::ScheduleAppointment::find()
            .filter(entity::schedule_appointment::Column::UserId.eq(user_id))
            .filter(entity::schedule_appointment::Column::ScheduledAt.eq(at))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Updates one occurrence; `None` leaves a field unchanged.
    pub async fn update(
        &self,
        appointment: entity::schedule_appointment::Model,
        title: Option<String>,
        memo: Option<String>,
        scheduled_at: Option<DateTime<Utc>>,
    ) -> Result<entity::schedule_appointment::Model, DbErr> {
        let mut active = appointment.into_active_model();

        if let Some(title) = title {
            active.title = ActiveValue::Set(title);
        }
        if let Some(memo) = memo {
            active.memo = ActiveValue::Set(Some(memo));
        }
        if let Some(scheduled_at) = scheduled_at {
            active.scheduled_at = ActiveValue::Set(scheduled_at);
        }

        active.update(self.db).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::ScheduleAppointment::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Gets every appointment generated from one recurrence rule.
    pub async fn list_group(
        &self,
        user_id: i32,
        group_id: &str,
    ) -> Result<Vec<entity::schedule_appointment::Model>, DbErr> {
        entity::prelude::ScheduleAppointment::find()
            .filter(entity::schedule_appointment::Column::UserId.eq(user_id))
            .filter(entity::schedule_appointment::Column::RecurrenceGroupId.eq(group_id))
            .order_by_asc(entity::schedule_appointment::Column::ScheduledAt)
            .all(self.db)
            .await
    }

    /// Deletes every appointment generated from one recurrence rule.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of deleted rows
    pub async fn delete_group(&self, user_id: i32, group_id: &str) -> Result<u64, DbErr> {
        let result = entity::prelude::ScheduleAppointment::delete_many()
            .filter(entity::schedule_appointment::Column::UserId.eq(user_id))
            .filter(entity::schedule_appointment::Column::RecurrenceGroupId.eq(group_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
