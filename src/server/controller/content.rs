use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        content::{
            AdminContentDto, ContentDto, ContentListItemDto, CreateContentDto, UpdateContentDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::content::ContentService,
        state::AppState,
    },
};

/// Tag for grouping content endpoints in OpenAPI documentation
pub static CONTENT_TAG: &str = "content";

#[derive(Deserialize)]
pub struct CategoryParam {
    pub category: Option<String>,
}

/// GET /api/contents?category= - List published content
#[utoipa::path(
    get,
    path = "/api/contents",
    tag = CONTENT_TAG,
    params(("category" = Option<String>, Query, description = "Category filter")),
    responses((status = 200, description = "Published items", body = Vec<ContentListItemDto>)),
)]
pub async fn list_contents(
    State(state): State<AppState>,
    Query(param): Query<CategoryParam>,
) -> Result<impl IntoResponse, AppError> {
    let items = ContentService::new(&state.db)
        .list(param.category.as_deref())
        .await?;

    Ok((StatusCode::OK, Json(items)))
}

/// GET /api/contents/{slug} - Get a published item rendered to HTML
#[utoipa::path(
    get,
    path = "/api/contents/{slug}",
    tag = CONTENT_TAG,
    params(("slug" = String, Path, description = "Content slug")),
    responses(
        (status = 200, description = "Rendered item", body = ContentDto),
        (status = 404, description = "Unknown or unpublished item", body = ErrorDto)
    ),
)]
pub async fn get_content(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let item = ContentService::new(&state.db).get(&slug).await?;

    Ok((StatusCode::OK, Json(item)))
}

/// GET /api/admin/contents - All items including drafts
///
/// # Access Control
/// - `ManageContent`
#[utoipa::path(
    get,
    path = "/api/admin/contents",
    tag = CONTENT_TAG,
    responses(
        (status = 200, description = "All items", body = Vec<AdminContentDto>),
        (status = 403, description = "Missing permission", body = ErrorDto)
    ),
)]
pub async fn admin_list_contents(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ManageContent])
        .await?;

    let items = ContentService::new(&state.db).admin_list().await?;

    Ok((StatusCode::OK, Json(items)))
}

/// POST /api/admin/contents - Create a content item
///
/// # Access Control
/// - `ManageContent`
#[utoipa::path(
    post,
    path = "/api/admin/contents",
    tag = CONTENT_TAG,
    request_body = CreateContentDto,
    responses(
        (status = 201, description = "Created item", body = AdminContentDto),
        (status = 409, description = "Slug already in use", body = ErrorDto)
    ),
)]
pub async fn admin_create_content(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateContentDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ManageContent])
        .await?;

    let item = ContentService::new(&state.db).create(payload).await?;

    Ok((StatusCode::CREATED, Json(item)))
}

/// PATCH /api/admin/contents/{slug} - Update a content item
///
/// # Access Control
/// - `ManageContent`
#[utoipa::path(
    patch,
    path = "/api/admin/contents/{slug}",
    tag = CONTENT_TAG,
    params(("slug" = String, Path, description = "Content slug")),
    request_body = UpdateContentDto,
    responses(
        (status = 200, description = "Updated item", body = AdminContentDto),
        (status = 404, description = "Unknown item", body = ErrorDto)
    ),
)]
pub async fn admin_update_content(
    State(state): State<AppState>,
    session: Session,
    Path(slug): Path<String>,
    Json(payload): Json<UpdateContentDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ManageContent])
        .await?;

    let item = ContentService::new(&state.db).update(&slug, payload).await?;

    Ok((StatusCode::OK, Json(item)))
}

/// DELETE /api/admin/contents/{slug} - Delete a content item
///
/// # Access Control
/// - `ManageContent`
#[utoipa::path(
    delete,
    path = "/api/admin/contents/{slug}",
    tag = CONTENT_TAG,
    params(("slug" = String, Path, description = "Content slug")),
    responses(
        (status = 204, description = "Item deleted"),
        (status = 404, description = "Unknown item", body = ErrorDto)
    ),
)]
pub async fn admin_delete_content(
    State(state): State<AppState>,
    session: Session,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ManageContent])
        .await?;

    ContentService::new(&state.db).delete(&slug).await?;

    Ok(StatusCode::NO_CONTENT)
}
