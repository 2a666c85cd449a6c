use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        quiz::{QuizDto, QuizListItemDto, QuizResultDto, SubmitQuizDto},
    },
    server::{error::AppError, service::quiz::QuizService, state::AppState},
};

/// Tag for grouping quiz endpoints in OpenAPI documentation
pub static QUIZ_TAG: &str = "quiz";

/// GET /api/quizzes - List available quizzes
#[utoipa::path(
    get,
    path = "/api/quizzes",
    tag = QUIZ_TAG,
    responses((status = 200, description = "Quizzes", body = Vec<QuizListItemDto>)),
)]
pub async fn list_quizzes(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let quizzes = QuizService::new(&state.db).list().await?;

    Ok((StatusCode::OK, Json(quizzes)))
}

/// GET /api/quizzes/{slug} - Get a quiz with its questions
#[utoipa::path(
    get,
    path = "/api/quizzes/{slug}",
    tag = QUIZ_TAG,
    params(("slug" = String, Path, description = "Quiz slug")),
    responses(
        (status = 200, description = "The quiz", body = QuizDto),
        (status = 404, description = "Unknown quiz", body = ErrorDto)
    ),
)]
pub async fn get_quiz(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let quiz = QuizService::new(&state.db).get(&slug).await?;

    Ok((StatusCode::OK, Json(quiz)))
}

/// POST /api/users/{uid}/quizzes/{slug}/submit - Score a submission
#[utoipa::path(
    post,
    path = "/api/users/{uid}/quizzes/{slug}/submit",
    tag = QUIZ_TAG,
    params(
        ("uid" = String, Path, description = "Firebase UID"),
        ("slug" = String, Path, description = "Quiz slug")
    ),
    request_body = SubmitQuizDto,
    responses(
        (status = 201, description = "Scored result", body = QuizResultDto),
        (status = 400, description = "No answer matched the quiz", body = ErrorDto),
        (status = 404, description = "Unknown quiz or user", body = ErrorDto)
    ),
)]
pub async fn submit_quiz(
    State(state): State<AppState>,
    Path((uid, slug)): Path<(String, String)>,
    Json(payload): Json<SubmitQuizDto>,
) -> Result<impl IntoResponse, AppError> {
    let result = QuizService::new(&state.db)
        .submit(&uid, &slug, payload.answers)
        .await?;

    Ok((StatusCode::CREATED, Json(result)))
}

/// GET /api/users/{uid}/quiz-results - Past results, newest first
#[utoipa::path(
    get,
    path = "/api/users/{uid}/quiz-results",
    tag = QUIZ_TAG,
    params(("uid" = String, Path, description = "Firebase UID")),
    responses(
        (status = 200, description = "Results", body = Vec<QuizResultDto>),
        (status = 404, description = "Unknown user", body = ErrorDto)
    ),
)]
pub async fn list_quiz_results(
    State(state): State<AppState>,
    Path(uid): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let results = QuizService::new(&state.db).results(&uid).await?;

    Ok((StatusCode::OK, Json(results)))
}
