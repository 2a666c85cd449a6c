use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::{
    model::{
        api::ErrorDto,
        emotion::{CreateEmotionRecordDto, EmotionRecordDto, UpdateEmotionRecordDto},
    },
    server::{error::AppError, service::emotion::EmotionService, state::AppState},
};

/// Tag for grouping emotion record endpoints in OpenAPI documentation
pub static EMOTION_TAG: &str = "emotion";

#[derive(Deserialize)]
pub struct MonthParam {
    pub year: i32,
    pub month: u32,
}

/// POST /api/users/{uid}/emotions - Create the day's mood record
///
/// One record per user per day; a second create for the same day returns 409.
#[utoipa::path(
    post,
    path = "/api/users/{uid}/emotions",
    tag = EMOTION_TAG,
    params(("uid" = String, Path, description = "Firebase UID")),
    request_body = CreateEmotionRecordDto,
    responses(
        (status = 201, description = "Created record", body = EmotionRecordDto),
        (status = 409, description = "Record already exists for this day", body = ErrorDto)
    ),
)]
pub async fn create_record(
    State(state): State<AppState>,
    Path(uid): Path<String>,
    Json(payload): Json<CreateEmotionRecordDto>,
) -> Result<impl IntoResponse, AppError> {
    let record = EmotionService::new(&state.db, &state.mirror)
        .create(&uid, payload)
        .await?;

    Ok((StatusCode::CREATED, Json(record)))
}

/// GET /api/users/{uid}/emotions?year=&month= - List a month of records
#[utoipa::path(
    get,
    path = "/api/users/{uid}/emotions",
    tag = EMOTION_TAG,
    params(
        ("uid" = String, Path, description = "Firebase UID"),
        ("year" = i32, Query, description = "Calendar year"),
        ("month" = u32, Query, description = "Calendar month (1-12)")
    ),
    responses(
        (status = 200, description = "Records of the month", body = Vec<EmotionRecordDto>),
        (status = 404, description = "Unknown user", body = ErrorDto)
    ),
)]
pub async fn list_month(
    State(state): State<AppState>,
    Path(uid): Path<String>,
    Query(param): Query<MonthParam>,
) -> Result<impl IntoResponse, AppError> {
    let records = EmotionService::new(&state.db, &state.mirror)
        .list_month(&uid, param.year, param.month)
        .await?;

    Ok((StatusCode::OK, Json(records)))
}

/// GET /api/users/{uid}/emotions/{date} - Get one day's record
#[utoipa::path(
    get,
    path = "/api/users/{uid}/emotions/{date}",
    tag = EMOTION_TAG,
    params(
        ("uid" = String, Path, description = "Firebase UID"),
        ("date" = String, Path, description = "Record date, YYYY-MM-DD")
    ),
    responses(
        (status = 200, description = "The record", body = EmotionRecordDto),
        (status = 404, description = "No record for this day", body = ErrorDto)
    ),
)]
pub async fn get_record(
    State(state): State<AppState>,
    Path((uid, date)): Path<(String, NaiveDate)>,
) -> Result<impl IntoResponse, AppError> {
    let record = EmotionService::new(&state.db, &state.mirror)
        .get(&uid, date)
        .await?;

    Ok((StatusCode::OK, Json(record)))
}

/// PATCH /api/users/{uid}/emotions/{date} - Update one day's record
#[utoipa::path(
    patch,
    path = "/api/users/{uid}/emotions/{date}",
    tag = EMOTION_TAG,
    params(
        ("uid" = String, Path, description = "Firebase UID"),
        ("date" = String, Path, description = "Record date, YYYY-MM-DD")
    ),
    request_body = UpdateEmotionRecordDto,
    responses(
        (status = 200, description = "Updated record", body = EmotionRecordDto),
        (status = 404, description = "No record for this day", body = ErrorDto)
    ),
)]
pub async fn update_record(
    State(state): State<AppState>,
    Path((uid, date)): Path<(String, NaiveDate)>,
    Json(payload): Json<UpdateEmotionRecordDto>,
) -> Result<impl IntoResponse, AppError> {
    let record = EmotionService::new(&state.db, &state.mirror)
        .update(&uid, date, payload)
        .await?;

    Ok((StatusCode::OK, Json(record)))
}

/// DELETE /api/users/{uid}/emotions/{date} - Delete one day's record
#[utoipa::path(
    delete,
    path = "/api/users/{uid}/emotions/{date}",
    tag = EMOTION_TAG,
    params(
        ("uid" = String, Path, description = "Firebase UID"),
        ("date" = String, Path, description = "Record date, YYYY-MM-DD")
    ),
    responses(
        (status = 204, description = "Record deleted"),
        (status = 404, description = "No record for this day", body = ErrorDto)
    ),
)]
pub async fn delete_record(
    State(state): State<AppState>,
    Path((uid, date)): Path<(String, NaiveDate)>,
) -> Result<impl IntoResponse, AppError> {
    EmotionService::new(&state.db, &state.mirror)
        .delete(&uid, date)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
