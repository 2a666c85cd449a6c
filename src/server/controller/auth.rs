use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

/// Session key holding the logged-in admin's account id.
pub static SESSION_AUTH_ADMIN_ID: &str = "auth:admin";

/// Tag for grouping admin auth endpoints in OpenAPI documentation
pub static ADMIN_AUTH_TAG: &str = "admin_auth";

use crate::{
    model::{admin::AdminLoginDto, api::ErrorDto},
    server::{
        error::AppError, middleware::auth::AuthGuard, service::admin::AdminService,
        state::AppState,
    },
};

/// Logs an admin into the back office.
///
/// Verifies the credentials and stores the account id in the session.
#[utoipa::path(
    post,
    path = "/api/admin/auth/login",
    tag = ADMIN_AUTH_TAG,
    request_body = AdminLoginDto,
    responses(
        (status = 200, description = "Logged in", body = crate::model::admin::AdminDto),
        (status = 401, description = "Unknown username or wrong password", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<AdminLoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AdminService::new(&state.db);

    let account = service.login(&payload.username, &payload.password).await?;

    session.insert(SESSION_AUTH_ADMIN_ID, account.id).await?;

    let dto = service.get(account.id).await?;

    Ok((StatusCode::OK, Json(dto)))
}

/// Logs the admin out by clearing the session.
#[utoipa::path(
    post,
    path = "/api/admin/auth/logout",
    tag = ADMIN_AUTH_TAG,
    responses((status = 204, description = "Logged out")),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    session.clear().await;

    Ok(StatusCode::NO_CONTENT)
}

/// Gets the logged-in admin's account and permissions.
#[utoipa::path(
    get,
    path = "/api/admin/auth/me",
    tag = ADMIN_AUTH_TAG,
    responses(
        (status = 200, description = "Current admin", body = crate::model::admin::AdminDto),
        (status = 401, description = "Not logged in", body = ErrorDto)
    ),
)]
pub async fn me(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let dto = AdminService::new(&state.db).get(admin.id).await?;

    Ok((StatusCode::OK, Json(dto)))
}
