use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        counseling::{ChatReplyDto, CreateSessionDto, SendMessageDto, SessionDetailDto, SessionDto},
    },
    server::{error::AppError, service::counseling::CounselingService, state::AppState},
};

/// Tag for grouping counseling endpoints in OpenAPI documentation
pub static COUNSELING_TAG: &str = "counseling";

/// POST /api/users/{uid}/sessions - Open a counseling session
#[utoipa::path(
    post,
    path = "/api/users/{uid}/sessions",
    tag = COUNSELING_TAG,
    params(("uid" = String, Path, description = "Firebase UID")),
    request_body = CreateSessionDto,
    responses(
        (status = 201, description = "Opened session", body = SessionDto),
        (status = 400, description = "Unknown persona", body = ErrorDto)
    ),
)]
pub async fn create_session(
    State(state): State<AppState>,
    Path(uid): Path<String>,
    Json(payload): Json<CreateSessionDto>,
) -> Result<impl IntoResponse, AppError> {
    let session = CounselingService::new(&state.db, &state.llm, &state.mirror)
        .create_session(&uid, &payload.persona, payload.title)
        .await?;

    Ok((StatusCode::CREATED, Json(session)))
}

/// GET /api/users/{uid}/sessions - List sessions, most recent activity first
#[utoipa::path(
    get,
    path = "/api/users/{uid}/sessions",
    tag = COUNSELING_TAG,
    params(("uid" = String, Path, description = "Firebase UID")),
    responses(
        (status = 200, description = "Sessions", body = Vec<SessionDto>),
        (status = 404, description = "Unknown user", body = ErrorDto)
    ),
)]
pub async fn list_sessions(
    State(state): State<AppState>,
    Path(uid): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let sessions = CounselingService::new(&state.db, &state.llm, &state.mirror)
        .list_sessions(&uid)
        .await?;

    Ok((StatusCode::OK, Json(sessions)))
}

/// GET /api/users/{uid}/sessions/{session_id} - Session with messages
#[utoipa::path(
    get,
    path = "/api/users/{uid}/sessions/{session_id}",
    tag = COUNSELING_TAG,
    params(
        ("uid" = String, Path, description = "Firebase UID"),
        ("session_id" = i32, Path, description = "Session id")
    ),
    responses(
        (status = 200, description = "Session detail", body = SessionDetailDto),
        (status = 404, description = "Unknown session", body = ErrorDto)
    ),
)]
pub async fn get_session(
    State(state): State<AppState>,
    Path((uid, session_id)): Path<(String, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let session = CounselingService::new(&state.db, &state.llm, &state.mirror)
        .get_session(&uid, session_id)
        .await?;

    Ok((StatusCode::OK, Json(session)))
}

/// DELETE /api/users/{uid}/sessions/{session_id} - Delete a session and its messages
#[utoipa::path(
    delete,
    path = "/api/users/{uid}/sessions/{session_id}",
    tag = COUNSELING_TAG,
    params(
        ("uid" = String, Path, description = "Firebase UID"),
        ("session_id" = i32, Path, description = "Session id")
    ),
    responses(
        (status = 204, description = "Session deleted"),
        (status = 404, description = "Unknown session", body = ErrorDto)
    ),
)]
pub async fn delete_session(
    State(state): State<AppState>,
    Path((uid, session_id)): Path<(String, i32)>,
) -> Result<impl IntoResponse, AppError> {
    CounselingService::new(&state.db, &state.llm, &state.mirror)
        .delete_session(&uid, session_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/users/{uid}/sessions/{session_id}/messages - Send a chat message
///
/// Stores the user message, asks the completion provider for the persona
/// reply, and returns both. Provider failures degrade to a fallback reply,
/// never a 5xx.
#[utoipa::path(
    post,
    path = "/api/users/{uid}/sessions/{session_id}/messages",
    tag = COUNSELING_TAG,
    params(
        ("uid" = String, Path, description = "Firebase UID"),
        ("session_id" = i32, Path, description = "Session id")
    ),
    request_body = SendMessageDto,
    responses(
        (status = 201, description = "Stored turn with assistant reply", body = ChatReplyDto),
        (status = 400, description = "Empty message", body = ErrorDto),
        (status = 404, description = "Unknown session", body = ErrorDto)
    ),
)]
pub async fn send_message(
    State(state): State<AppState>,
    Path((uid, session_id)): Path<(String, i32)>,
    Json(payload): Json<SendMessageDto>,
) -> Result<impl IntoResponse, AppError> {
    let reply = CounselingService::new(&state.db, &state.llm, &state.mirror)
        .send_message(&uid, session_id, payload.content)
        .await?;

    Ok((StatusCode::CREATED, Json(reply)))
}
