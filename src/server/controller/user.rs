use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        user::{UpdateUserDto, UpsertUserDto, UserDto},
    },
    server::{error::AppError, service::user::UserService, state::AppState},
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// POST /api/users - Register or refresh a user by UID
///
/// The client calls this after every sign-in; an existing UID gets its email
/// and nickname refreshed instead of a new row.
#[utoipa::path(
    post,
    path = "/api/users",
    tag = USER_TAG,
    request_body = UpsertUserDto,
    responses(
        (status = 200, description = "Created or refreshed user", body = UserDto),
        (status = 400, description = "Missing required fields", body = ErrorDto)
    ),
)]
pub async fn upsert_user(
    State(state): State<AppState>,
    Json(payload): Json<UpsertUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db, &state.mirror)
        .upsert(payload.uid, payload.email, payload.nickname)
        .await?;

    Ok((StatusCode::OK, Json(user)))
}

/// GET /api/users/{uid} - Get a user's profile
#[utoipa::path(
    get,
    path = "/api/users/{uid}",
    tag = USER_TAG,
    params(("uid" = String, Path, description = "Firebase UID")),
    responses(
        (status = 200, description = "User profile", body = UserDto),
        (status = 404, description = "Unknown user", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(uid): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db, &state.mirror).get(&uid).await?;

    Ok((StatusCode::OK, Json(user)))
}

/// PATCH /api/users/{uid} - Update profile fields
#[utoipa::path(
    patch,
    path = "/api/users/{uid}",
    tag = USER_TAG,
    params(("uid" = String, Path, description = "Firebase UID")),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "Updated user", body = UserDto),
        (status = 404, description = "Unknown user", body = ErrorDto)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(uid): Path<String>,
    Json(payload): Json<UpdateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db, &state.mirror)
        .update(&uid, payload.email, payload.nickname)
        .await?;

    Ok((StatusCode::OK, Json(user)))
}
