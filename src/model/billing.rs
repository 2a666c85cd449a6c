use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PlanDto {
    pub code: String,
    pub name: String,
    pub price_krw: i32,
    pub period_days: i32,
    pub description: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct SubscriptionDto {
    pub plan_code: String,
    pub plan_name: String,
    /// "pending", "active", "expired" or "canceled".
    pub status: String,
    #[serde(with = "chrono::serde::ts_seconds_option")]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(with = "chrono::serde::ts_seconds_option")]
    pub expires_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpgradeDto {
    pub plan_code: String,
}

/// Checkout handle the client passes to the payment widget.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpgradeResultDto {
    pub order_id: String,
    pub amount: i32,
}

/// Confirm callback body, relayed from the payment widget success redirect.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ConfirmPaymentDto {
    pub payment_key: String,
    pub order_id: String,
    pub amount: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PaymentResultDto {
    pub order_id: String,
    /// "ready", "confirmed" or "failed".
    pub status: String,
    #[serde(with = "chrono::serde::ts_seconds_option")]
    pub confirmed_at: Option<DateTime<Utc>>,
}
