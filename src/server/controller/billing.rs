use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        billing::{
            ConfirmPaymentDto, PaymentResultDto, PlanDto, SubscriptionDto, UpgradeDto,
            UpgradeResultDto,
        },
    },
    server::{error::AppError, service::billing::BillingService, state::AppState},
};

/// Tag for grouping billing endpoints in OpenAPI documentation
pub static BILLING_TAG: &str = "billing";

/// GET /api/plans - Available subscription plans
#[utoipa::path(
    get,
    path = "/api/plans",
    tag = BILLING_TAG,
    responses((status = 200, description = "Plans, cheapest first", body = Vec<PlanDto>)),
)]
pub async fn list_plans(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let plans = BillingService::new(&state.db, &state.toss, &state.mirror)
        .plans()
        .await?;

    Ok((StatusCode::OK, Json(plans)))
}

/// GET /api/users/{uid}/subscription - Current subscription
///
/// A user without any subscription row is reported as on the free plan.
#[utoipa::path(
    get,
    path = "/api/users/{uid}/subscription",
    tag = BILLING_TAG,
    params(("uid" = String, Path, description = "Firebase UID")),
    responses(
        (status = 200, description = "Current subscription", body = SubscriptionDto),
        (status = 404, description = "Unknown user", body = ErrorDto)
    ),
)]
pub async fn get_subscription(
    State(state): State<AppState>,
    Path(uid): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let subscription = BillingService::new(&state.db, &state.toss, &state.mirror)
        .subscription(&uid)
        .await?;

    Ok((StatusCode::OK, Json(subscription)))
}

/// DELETE /api/users/{uid}/subscription - Cancel the active subscription
///
/// Paid access is kept until the end of the period; only the status changes.
#[utoipa::path(
    delete,
    path = "/api/users/{uid}/subscription",
    tag = BILLING_TAG,
    params(("uid" = String, Path, description = "Firebase UID")),
    responses(
        (status = 200, description = "Canceled subscription", body = SubscriptionDto),
        (status = 400, description = "No active subscription", body = ErrorDto)
    ),
)]
pub async fn cancel_subscription(
    State(state): State<AppState>,
    Path(uid): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let subscription = BillingService::new(&state.db, &state.toss, &state.mirror)
        .cancel(&uid)
        .await?;

    Ok((StatusCode::OK, Json(subscription)))
}

/// POST /api/users/{uid}/subscription/upgrade - Start a plan upgrade
///
/// Creates the pending subscription and payment order the checkout widget
/// will confirm.
#[utoipa::path(
    post,
    path = "/api/users/{uid}/subscription/upgrade",
    tag = BILLING_TAG,
    params(("uid" = String, Path, description = "Firebase UID")),
    request_body = UpgradeDto,
    responses(
        (status = 201, description = "Checkout handle", body = UpgradeResultDto),
        (status = 400, description = "Unknown or free plan", body = ErrorDto)
    ),
)]
pub async fn upgrade_subscription(
    State(state): State<AppState>,
    Path(uid): Path<String>,
    Json(payload): Json<UpgradeDto>,
) -> Result<impl IntoResponse, AppError> {
    let result = BillingService::new(&state.db, &state.toss, &state.mirror)
        .upgrade(&uid, &payload.plan_code)
        .await?;

    Ok((StatusCode::CREATED, Json(result)))
}

/// POST /api/payments/confirm - Payment provider confirm callback
///
/// Validates the amount against the stored order, confirms with the
/// provider, and activates the subscription on approval.
#[utoipa::path(
    post,
    path = "/api/payments/confirm",
    tag = BILLING_TAG,
    request_body = ConfirmPaymentDto,
    responses(
        (status = 200, description = "Payment state after confirm", body = PaymentResultDto),
        (status = 400, description = "Amount mismatch or provider rejection", body = ErrorDto),
        (status = 404, description = "Unknown order", body = ErrorDto)
    ),
)]
pub async fn confirm_payment(
    State(state): State<AppState>,
    Json(payload): Json<ConfirmPaymentDto>,
) -> Result<impl IntoResponse, AppError> {
    let result = BillingService::new(&state.db, &state.toss, &state.mirror)
        .confirm(&payload.payment_key, &payload.order_id, payload.amount)
        .await?;

    Ok((StatusCode::OK, Json(result)))
}
