//! Schedule appointment service, including recurring-series creation.

pub mod recurrence;

use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::{
    model::schedule::{
        AppointmentDto, CreateAppointmentDto, CreateAppointmentResultDto, UpdateAppointmentDto,
    },
    server::{
        data::{schedule::ScheduleRepository, user::UserRepository},
        error::AppError,
        model::schedule::{CreateAppointmentParams, RecurrenceRule},
        service::mirror::MirrorService,
        util::parse::parse_datetime_from_string,
    },
};

pub struct ScheduleService<'a> {
    db: &'a DatabaseConnection,
    mirror: &'a MirrorService,
}

impl<'a> ScheduleService<'a> {
    pub fn new(db: &'a DatabaseConnection, mirror: &'a MirrorService) -> Self {
        Self { db, mirror }
    }

    /// Creates a single appointment or expands a recurrence rule into a
    /// series.
    ///
    /// Series occurrences share one generated group id. An occurrence whose
    /// timestamp the user already has an appointment at is skipped and
    /// reported in the result; there is no broader conflict detection.
    pub async fn create(
        &self,
        uid: &str,
        dto: CreateAppointmentDto,
    ) -> Result<CreateAppointmentResultDto, AppError> {
        let user = self.find_user(uid).await?;
        let repo = ScheduleRepository::new(self.db);

        let anchor = parse_datetime_from_string(&dto.scheduled_at)?;

        let Some(recurrence) = &dto.recurrence else {
            let appointment = repo
                .create(CreateAppointmentParams {
                    user_id: user.id,
                    title: dto.title,
                    memo: dto.memo,
                    scheduled_at: anchor,
                    recurrence_group_id: None,
                })
                .await?;

            self.mirror.mirror_appointment(uid, &appointment).await;

            return Ok(CreateAppointmentResultDto {
                appointments: vec![appointment_to_dto(appointment)],
                recurrence_group_id: None,
                skipped_dates: Vec::new(),
            });
        };

        let (rule, count) = RecurrenceRule::from_dto(recurrence)?;
        let occurrences = recurrence::expand(anchor, &rule, count);

        let group_id = Uuid::new_v4().to_string();
        let mut appointments = Vec::with_capacity(occurrences.len());
        let mut skipped_dates = Vec::new();

        for occurrence in occurrences {
            if repo.exists_at(user.id, occurrence).await? {
                skipped_dates.push(occurrence.format("%Y-%m-%d %H:%M").to_string());
                continue;
            }

            let appointment = repo
                .create(CreateAppointmentParams {
                    user_id: user.id,
                    title: dto.title.clone(),
                    memo: dto.memo.clone(),
                    scheduled_at: occurrence,
                    recurrence_group_id: Some(group_id.clone()),
                })
                .await?;

            self.mirror.mirror_appointment(uid, &appointment).await;
            appointments.push(appointment_to_dto(appointment));
        }

        Ok(CreateAppointmentResultDto {
            appointments,
            recurrence_group_id: Some(group_id),
            skipped_dates,
        })
    }

    /// Lists appointments in an optional `[from, to)` range, soonest first.
    pub async fn list(
        &self,
        uid: &str,
        from: Option<&str>,
        to: Option<&str>,
    ) -> Result<Vec<AppointmentDto>, AppError> {
        let user = self.find_user(uid).await?;

        let from = from.map(parse_datetime_from_string).transpose()?;
        let to = to.map(parse_datetime_from_string).transpose()?;

        let appointments = ScheduleRepository::new(self.db)
            .list_between(user.id, from, to)
            .await?;

        Ok(appointments.into_iter().map(appointment_to_dto).collect())
    }

    pub async fn update(
        &self,
        uid: &str,
        appointment_id: i32,
        dto: UpdateAppointmentDto,
    ) -> Result<AppointmentDto, AppError> {
        let user = self.find_user(uid).await?;
        let repo = ScheduleRepository::new(self.db);

        let appointment = repo
            .find_by_id_for_user(user.id, appointment_id)
            .await?
            .ok_or_else(appointment_not_found)?;

        let scheduled_at = dto
            .scheduled_at
            .as_deref()
            .map(parse_datetime_from_string)
            .transpose()?;

        let updated = repo
            .update(appointment, dto.title, dto.memo, scheduled_at)
            .await?;

        self.mirror.mirror_appointment(uid, &updated).await;

        Ok(appointment_to_dto(updated))
    }

    pub async fn delete(&self, uid: &str, appointment_id: i32) -> Result<(), AppError> {
        let user = self.find_user(uid).await?;
        let repo = ScheduleRepository::new(self.db);

        let appointment = repo
            .find_by_id_for_user(user.id, appointment_id)
            .await?
            .ok_or_else(appointment_not_found)?;

        repo.delete(appointment.id).await?;
        self.mirror
            .mirror_appointment_deleted(uid, appointment_id)
            .await;

        Ok(())
    }

    /// Cancels a recurring series: deletes every appointment carrying the
    /// group id.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of deleted appointments
    pub async fn delete_group(&self, uid: &str, group_id: &str) -> Result<u64, AppError> {
        let user = self.find_user(uid).await?;
        let repo = ScheduleRepository::new(self.db);

        let members = repo.list_group(user.id, group_id).await?;
        if members.is_empty() {
            return Err(AppError::NotFound(
                "반복 일정을 찾을 수 없습니다.".to_string(),
            ));
        }

        let deleted = repo.delete_group(user.id, group_id).await?;

        for member in &members {
            self.mirror.mirror_appointment_deleted(uid, member.id).await;
        }

        Ok(deleted)
    }

    async fn find_user(&self, uid: &str) -> Result<entity::user::Model, AppError> {
        UserRepository::new(self.db)
            .find_by_uid(uid)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다.".to_string()))
    }
}

fn appointment_not_found() -> AppError {
    AppError::NotFound("일정을 찾을 수 없습니다.".to_string())
}

fn appointment_to_dto(appointment: entity::schedule_appointment::Model) -> AppointmentDto {
    AppointmentDto {
        id: appointment.id,
        title: appointment.title,
        memo: appointment.memo,
        scheduled_at: appointment.scheduled_at,
        recurrence_group_id: appointment.recurrence_group_id,
        created_at: appointment.created_at,
    }
}
