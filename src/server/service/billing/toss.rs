//! Client for the Toss Payments confirm API.
//!
//! One POST to `/v1/payments/confirm` authenticated with the secret key via
//! HTTP Basic auth (key as username, empty password). No retry; a rejection
//! is surfaced as a `BillingError::ConfirmRejected`.

use base64::Engine as _;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::server::error::{billing::BillingError, AppError};

#[derive(Clone)]
pub struct TossClient {
    client: reqwest::Client,
    api_base: String,
    secret_key: String,
}

/// The confirm response field the service actually uses.
#[derive(Debug, Clone, Deserialize)]
pub struct TossConfirmResponse {
    pub status: String,
}

impl TossClient {
    pub fn new(client: reqwest::Client, api_base: String, secret_key: String) -> Self {
        Self {
            client,
            api_base,
            secret_key,
        }
    }

    /// Confirms a checkout with the provider.
    ///
    /// # Returns
    /// - `Ok(TossConfirmResponse)` - Provider approved the payment
    /// - `Err(AppError::BillingErr(ConfirmRejected))` - Provider rejected it
    /// - `Err(AppError::ReqwestErr)` - Transport failure
    pub async fn confirm(
        &self,
        payment_key: &str,
        order_id: &str,
        amount: i32,
    ) -> Result<TossConfirmResponse, AppError> {
        let response = self
            .client
            .post(format!("{}/v1/payments/confirm", self.api_base))
            .header("Authorization", basic_auth_value(&self.secret_key))
            .json(&json!({
                "paymentKey": payment_key,
                "orderId": order_id,
                "amount": amount,
            }))
            .send()
            .await?;

        if response.status().is_success() {
            return Ok(response.json().await?);
        }

        let body: Value = response.json().await.unwrap_or_default();

        Err(BillingError::ConfirmRejected {
            code: body["code"].as_str().unwrap_or("UNKNOWN").to_string(),
            message: body["message"]
                .as_str()
                .unwrap_or("결제 승인에 실패했습니다.")
                .to_string(),
        }
        .into())
    }
}

/// Builds the `Basic` authorization header value: base64 of "{secret_key}:".
fn basic_auth_value(secret_key: &str) -> String {
    let credentials = base64::engine::general_purpose::STANDARD.encode(format!("{}:", secret_key));

    format!("Basic {}", credentials)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn encodes_secret_key_with_trailing_colon() {
        // Documented example from the provider: "test_sk_docs:" base64-encoded.
        assert_eq!(
            basic_auth_value("test_sk_docs"),
            "Basic dGVzdF9za19kb2NzOg=="
        );
    }
}
