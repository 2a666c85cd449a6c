use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        admin::{AdminDto, CreateAdminDto, PaginatedUsersDto, SetPermissionsDto},
        api::ErrorDto,
    },
    server::{
        controller::param::PaginationParam,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::admin::AdminService,
        state::AppState,
    },
};

/// Tag for grouping admin endpoints in OpenAPI documentation
pub static ADMIN_TAG: &str = "admin";

/// GET /api/admin/accounts - List admin accounts with their permissions
///
/// # Access Control
/// - `ManageAdmins`
#[utoipa::path(
    get,
    path = "/api/admin/accounts",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Admin accounts", body = Vec<AdminDto>),
        (status = 403, description = "Missing permission", body = ErrorDto)
    ),
)]
pub async fn list_accounts(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ManageAdmins])
        .await?;

    let accounts = AdminService::new(&state.db).list().await?;

    Ok((StatusCode::OK, Json(accounts)))
}

/// POST /api/admin/accounts - Create an admin account
///
/// # Access Control
/// - `ManageAdmins`
#[utoipa::path(
    post,
    path = "/api/admin/accounts",
    tag = ADMIN_TAG,
    request_body = CreateAdminDto,
    responses(
        (status = 201, description = "Created account", body = AdminDto),
        (status = 409, description = "Username already in use", body = ErrorDto)
    ),
)]
pub async fn create_account(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateAdminDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ManageAdmins])
        .await?;

    let account = AdminService::new(&state.db)
        .create(
            payload.username,
            payload.password,
            payload.display_name,
            payload.permissions,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(account)))
}

/// DELETE /api/admin/accounts/{id} - Delete an admin account
///
/// Deleting your own account is rejected so a back office cannot lock itself
/// out one admin at a time by accident.
///
/// # Access Control
/// - `ManageAdmins`
#[utoipa::path(
    delete,
    path = "/api/admin/accounts/{id}",
    tag = ADMIN_TAG,
    params(("id" = i32, Path, description = "Account id")),
    responses(
        (status = 204, description = "Account deleted"),
        (status = 400, description = "Attempted self-deletion", body = ErrorDto),
        (status = 404, description = "Unknown account", body = ErrorDto)
    ),
)]
pub async fn delete_account(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ManageAdmins])
        .await?;

    if admin.id == id {
        return Err(AppError::BadRequest(
            "자기 자신의 계정은 삭제할 수 없습니다.".to_string(),
        ));
    }

    AdminService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// PUT /api/admin/accounts/{id}/permissions - Replace an account's grants
///
/// # Access Control
/// - `ManageAdmins`
#[utoipa::path(
    put,
    path = "/api/admin/accounts/{id}/permissions",
    tag = ADMIN_TAG,
    params(("id" = i32, Path, description = "Account id")),
    request_body = SetPermissionsDto,
    responses(
        (status = 200, description = "Updated account", body = AdminDto),
        (status = 400, description = "Unknown permission key", body = ErrorDto),
        (status = 404, description = "Unknown account", body = ErrorDto)
    ),
)]
pub async fn set_permissions(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<SetPermissionsDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ManageAdmins])
        .await?;

    let account = AdminService::new(&state.db)
        .set_permissions(id, payload.permissions)
        .await?;

    Ok((StatusCode::OK, Json(account)))
}

/// GET /api/admin/users - Paginated consumer-user listing
///
/// # Access Control
/// - `ManageUsers`
#[utoipa::path(
    get,
    path = "/api/admin/users",
    tag = ADMIN_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("per_page" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Page of users", body = PaginatedUsersDto),
        (status = 403, description = "Missing permission", body = ErrorDto)
    ),
)]
pub async fn list_users(
    State(state): State<AppState>,
    session: Session,
    Query(param): Query<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ManageUsers])
        .await?;

    let users = AdminService::new(&state.db)
        .list_users(param.page, param.per_page)
        .await?;

    Ok((StatusCode::OK, Json(users)))
}
