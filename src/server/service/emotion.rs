//! Mood journaling service.
//!
//! Enforces the one-record-per-user-per-day rule at write time. The check is
//! an application-level existence query, not a schema constraint, mirroring
//! the original system's behavior.

use chrono::NaiveDate;
use sea_orm::DatabaseConnection;

use crate::{
    model::emotion::{CreateEmotionRecordDto, EmotionRecordDto, UpdateEmotionRecordDto},
    server::{
        data::{emotion::EmotionRecordRepository, user::UserRepository},
        error::AppError,
        service::mirror::MirrorService,
    },
};

/// Mood kinds accepted by the journal.
pub const MOODS: [&str; 5] = ["joy", "sadness", "anger", "anxiety", "calm"];

pub struct EmotionService<'a> {
    db: &'a DatabaseConnection,
    mirror: &'a MirrorService,
}

impl<'a> EmotionService<'a> {
    pub fn new(db: &'a DatabaseConnection, mirror: &'a MirrorService) -> Self {
        Self { db, mirror }
    }

    /// Creates the day's record. A second record for the same day is a 409.
    pub async fn create(
        &self,
        uid: &str,
        dto: CreateEmotionRecordDto,
    ) -> Result<EmotionRecordDto, AppError> {
        validate_mood(&dto.mood)?;
        validate_intensity(dto.intensity)?;

        let user = self.find_user(uid).await?;
        let repo = EmotionRecordRepository::new(self.db);

        if repo
            .find_by_user_and_date(user.id, dto.record_date)
            .await?
            .is_some()
        {
            return Err(AppError::Conflict(
                "해당 날짜의 감정 기록이 이미 있습니다.".to_string(),
            ));
        }

        let record = repo
            .create(user.id, dto.record_date, dto.mood, dto.intensity, dto.note)
            .await?;

        self.mirror.mirror_emotion(uid, &record).await;

        Ok(record_to_dto(record))
    }

    /// Lists one month of records, date-ordered.
    pub async fn list_month(
        &self,
        uid: &str,
        year: i32,
        month: u32,
    ) -> Result<Vec<EmotionRecordDto>, AppError> {
        let user = self.find_user(uid).await?;

        let from = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or_else(|| AppError::BadRequest("날짜 형식이 올바르지 않습니다.".to_string()))?;
        let to = next_month(from);

        let records = EmotionRecordRepository::new(self.db)
            .list_between(user.id, from, to)
            .await?;

        Ok(records.into_iter().map(record_to_dto).collect())
    }

    pub async fn get(&self, uid: &str, record_date: NaiveDate) -> Result<EmotionRecordDto, AppError> {
        let user = self.find_user(uid).await?;

        let record = EmotionRecordRepository::new(self.db)
            .find_by_user_and_date(user.id, record_date)
            .await?
            .ok_or_else(record_not_found)?;

        Ok(record_to_dto(record))
    }

    pub async fn update(
        &self,
        uid: &str,
        record_date: NaiveDate,
        dto: UpdateEmotionRecordDto,
    ) -> Result<EmotionRecordDto, AppError> {
        if let Some(mood) = &dto.mood {
            validate_mood(mood)?;
        }
        if let Some(intensity) = dto.intensity {
            validate_intensity(intensity)?;
        }

        let user = self.find_user(uid).await?;
        let repo = EmotionRecordRepository::new(self.db);

        let record = repo
            .find_by_user_and_date(user.id, record_date)
            .await?
            .ok_or_else(record_not_found)?;

        let updated = repo
            .update(record, dto.mood, dto.intensity, dto.note)
            .await?;

        self.mirror.mirror_emotion(uid, &updated).await;

        Ok(record_to_dto(updated))
    }

    pub async fn delete(&self, uid: &str, record_date: NaiveDate) -> Result<(), AppError> {
        let user = self.find_user(uid).await?;
        let repo = EmotionRecordRepository::new(self.db);

        let record = repo
            .find_by_user_and_date(user.id, record_date)
            .await?
            .ok_or_else(record_not_found)?;

        repo.delete(record.id).await?;
        self.mirror.mirror_emotion_deleted(uid, record_date).await;

        Ok(())
    }

    async fn find_user(&self, uid: &str) -> Result<entity::user::Model, AppError> {
        UserRepository::new(self.db)
            .find_by_uid(uid)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다.".to_string()))
    }
}

fn validate_mood(mood: &str) -> Result<(), AppError> {
    if MOODS.contains(&mood) {
        Ok(())
    } else {
        Err(AppError::BadRequest(
            "알 수 없는 감정 유형입니다.".to_string(),
        ))
    }
}

fn validate_intensity(intensity: i32) -> Result<(), AppError> {
    if (1..=10).contains(&intensity) {
        Ok(())
    } else {
        Err(AppError::BadRequest(
            "감정 강도는 1에서 10 사이여야 합니다.".to_string(),
        ))
    }
}

fn record_not_found() -> AppError {
    AppError::NotFound("감정 기록을 찾을 수 없습니다.".to_string())
}

fn next_month(date: NaiveDate) -> NaiveDate {
    use chrono::Datelike;

    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };

    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(date)
}

fn record_to_dto(record: entity::emotion_record::Model) -> EmotionRecordDto {
    EmotionRecordDto {
        id: record.id,
        record_date: record.record_date,
        mood: record.mood,
        intensity: record.intensity,
        note: record.note,
        created_at: record.created_at,
        updated_at: record.updated_at,
    }
}
