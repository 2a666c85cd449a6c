use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum BillingError {
    /// The confirm callback amount does not match the amount stored at
    /// checkout. Results in a 400 Bad Request; the payment is not confirmed.
    #[error("Payment amount mismatch: expected {expected}, got {actual}")]
    AmountMismatch { expected: i32, actual: i32 },

    /// The payment provider rejected the confirm call.
    ///
    /// Carries the provider's error code and message. Results in a 400 Bad
    /// Request with the provider message surfaced to the client.
    #[error("Payment confirm rejected ({code}): {message}")]
    ConfirmRejected { code: String, message: String },
}

impl IntoResponse for BillingError {
    fn into_response(self) -> Response {
        match self {
            Self::AmountMismatch { .. } => {
                tracing::debug!("{}", self);
                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorDto {
                        error: "결제 금액이 일치하지 않습니다.".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::ConfirmRejected { message, .. } => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: message })).into_response()
            }
        }
    }
}
