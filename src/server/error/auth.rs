use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No admin id stored in the session.
    ///
    /// The request reached an admin endpoint without a prior login. Results
    /// in a 401 Unauthorized response.
    #[error("No admin in session")]
    AdminNotInSession,

    /// The session references an admin account that no longer exists.
    ///
    /// Happens when an account is deleted while one of its sessions is still
    /// live. Results in a 401 Unauthorized response.
    #[error("Admin {0} in session but not in database")]
    AdminNotInDatabase(i32),

    /// Username unknown or password mismatch during login.
    ///
    /// Results in a 401 Unauthorized response. The message does not reveal
    /// which of the two failed.
    #[error("Invalid admin credentials")]
    InvalidCredentials,

    /// The admin is authenticated but lacks a required permission grant.
    ///
    /// Results in a 403 Forbidden response.
    #[error("Admin {admin_id} denied: missing permission '{permission}'")]
    AccessDenied { admin_id: i32, permission: String },
}

/// Converts authentication errors into HTTP responses.
///
/// Session and credential failures map to 401 with Korean user-facing
/// messages; permission failures map to 403. Details are logged server-side,
/// the client-facing text stays generic.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::AdminNotInSession | Self::AdminNotInDatabase(_) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "로그인이 필요합니다.".to_string(),
                }),
            )
                .into_response(),
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "아이디 또는 비밀번호가 올바르지 않습니다.".to_string(),
                }),
            )
                .into_response(),
            Self::AccessDenied { .. } => {
                tracing::debug!("{}", self);
                (
                    StatusCode::FORBIDDEN,
                    Json(ErrorDto {
                        error: "접근 권한이 없습니다.".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
