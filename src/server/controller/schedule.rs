use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use serde_json::json;

use crate::{
    model::{
        api::ErrorDto,
        schedule::{
            AppointmentDto, CreateAppointmentDto, CreateAppointmentResultDto, UpdateAppointmentDto,
        },
    },
    server::{error::AppError, service::schedule::ScheduleService, state::AppState},
};

/// Tag for grouping schedule endpoints in OpenAPI documentation
pub static SCHEDULE_TAG: &str = "schedule";

#[derive(Deserialize)]
pub struct RangeParam {
    /// Inclusive lower bound, "YYYY-MM-DD HH:MM".
    pub from: Option<String>,
    /// Exclusive upper bound, "YYYY-MM-DD HH:MM".
    pub to: Option<String>,
}

/// POST /api/users/{uid}/appointments - Create an appointment or a recurring series
///
/// With a recurrence rule the generator expands it into concrete dates; dates
/// the user already has an appointment at are skipped and reported back.
#[utoipa::path(
    post,
    path = "/api/users/{uid}/appointments",
    tag = SCHEDULE_TAG,
    params(("uid" = String, Path, description = "Firebase UID")),
    request_body = CreateAppointmentDto,
    responses(
        (status = 201, description = "Created appointment(s)", body = CreateAppointmentResultDto),
        (status = 400, description = "Malformed date or recurrence rule", body = ErrorDto)
    ),
)]
pub async fn create_appointment(
    State(state): State<AppState>,
    Path(uid): Path<String>,
    Json(payload): Json<CreateAppointmentDto>,
) -> Result<impl IntoResponse, AppError> {
    let result = ScheduleService::new(&state.db, &state.mirror)
        .create(&uid, payload)
        .await?;

    Ok((StatusCode::CREATED, Json(result)))
}

/// GET /api/users/{uid}/appointments?from=&to= - List appointments in a range
#[utoipa::path(
    get,
    path = "/api/users/{uid}/appointments",
    tag = SCHEDULE_TAG,
    params(
        ("uid" = String, Path, description = "Firebase UID"),
        ("from" = Option<String>, Query, description = "Range start, YYYY-MM-DD HH:MM"),
        ("to" = Option<String>, Query, description = "Range end, YYYY-MM-DD HH:MM")
    ),
    responses(
        (status = 200, description = "Appointments, soonest first", body = Vec<AppointmentDto>),
        (status = 404, description = "Unknown user", body = ErrorDto)
    ),
)]
pub async fn list_appointments(
    State(state): State<AppState>,
    Path(uid): Path<String>,
    Query(param): Query<RangeParam>,
) -> Result<impl IntoResponse, AppError> {
    let appointments = ScheduleService::new(&state.db, &state.mirror)
        .list(&uid, param.from.as_deref(), param.to.as_deref())
        .await?;

    Ok((StatusCode::OK, Json(appointments)))
}

/// PATCH /api/users/{uid}/appointments/{id} - Edit one occurrence
#[utoipa::path(
    patch,
    path = "/api/users/{uid}/appointments/{id}",
    tag = SCHEDULE_TAG,
    params(
        ("uid" = String, Path, description = "Firebase UID"),
        ("id" = i32, Path, description = "Appointment id")
    ),
    request_body = UpdateAppointmentDto,
    responses(
        (status = 200, description = "Updated appointment", body = AppointmentDto),
        (status = 404, description = "Unknown appointment", body = ErrorDto)
    ),
)]
pub async fn update_appointment(
    State(state): State<AppState>,
    Path((uid, id)): Path<(String, i32)>,
    Json(payload): Json<UpdateAppointmentDto>,
) -> Result<impl IntoResponse, AppError> {
    let appointment = ScheduleService::new(&state.db, &state.mirror)
        .update(&uid, id, payload)
        .await?;

    Ok((StatusCode::OK, Json(appointment)))
}

/// DELETE /api/users/{uid}/appointments/{id} - Delete one occurrence
#[utoipa::path(
    delete,
    path = "/api/users/{uid}/appointments/{id}",
    tag = SCHEDULE_TAG,
    params(
        ("uid" = String, Path, description = "Firebase UID"),
        ("id" = i32, Path, description = "Appointment id")
    ),
    responses(
        (status = 204, description = "Appointment deleted"),
        (status = 404, description = "Unknown appointment", body = ErrorDto)
    ),
)]
pub async fn delete_appointment(
    State(state): State<AppState>,
    Path((uid, id)): Path<(String, i32)>,
) -> Result<impl IntoResponse, AppError> {
    ScheduleService::new(&state.db, &state.mirror)
        .delete(&uid, id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/users/{uid}/appointments/groups/{group_id} - Cancel a series
///
/// Deletes every appointment generated from one recurrence rule. This is the
/// only series-level operation; there are no per-occurrence exceptions.
#[utoipa::path(
    delete,
    path = "/api/users/{uid}/appointments/groups/{group_id}",
    tag = SCHEDULE_TAG,
    params(
        ("uid" = String, Path, description = "Firebase UID"),
        ("group_id" = String, Path, description = "Recurrence group id")
    ),
    responses(
        (status = 200, description = "Series deleted, returns count"),
        (status = 404, description = "Unknown group", body = ErrorDto)
    ),
)]
pub async fn delete_appointment_group(
    State(state): State<AppState>,
    Path((uid, group_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let deleted = ScheduleService::new(&state.db, &state.mirror)
        .delete_group(&uid, &group_id)
        .await?;

    Ok((StatusCode::OK, Json(json!({ "deleted": deleted }))))
}
