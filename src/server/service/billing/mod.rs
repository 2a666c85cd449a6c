//! Subscription and payment service.
//!
//! Upgrade flow: the client picks a plan, this service creates a pending
//! subscription and a payment row with a generated order id, the client runs
//! the provider checkout, and the confirm callback lands here. Confirm
//! validates the amount against what was stored at checkout, then makes one
//! provider call; success activates the subscription, rejection marks the
//! payment failed. No retry logic anywhere.

pub mod toss;

use chrono::{Duration, Utc};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::{
    model::billing::{PaymentResultDto, PlanDto, SubscriptionDto, UpgradeResultDto},
    server::{
        data::{billing::BillingRepository, user::UserRepository},
        error::{billing::BillingError, AppError},
        model::billing::{PaymentStatus, SubscriptionStatus},
        service::{billing::toss::TossClient, mirror::MirrorService},
    },
};

pub struct BillingService<'a> {
    db: &'a DatabaseConnection,
    toss: &'a TossClient,
    mirror: &'a MirrorService,
}

impl<'a> BillingService<'a> {
    pub fn new(db: &'a DatabaseConnection, toss: &'a TossClient, mirror: &'a MirrorService) -> Self {
        Self { db, toss, mirror }
    }

    pub async fn plans(&self) -> Result<Vec<PlanDto>, AppError> {
        let plans = BillingRepository::new(self.db).list_plans().await?;

        Ok(plans.into_iter().map(plan_to_dto).collect())
    }

    /// Gets the user's current subscription. A user with no subscription row
    /// is reported as being on the free plan.
    pub async fn subscription(&self, uid: &str) -> Result<SubscriptionDto, AppError> {
        let user = self.find_user(uid).await?;
        let repo = BillingRepository::new(self.db);

        if let Some((subscription, plan)) =
            repo.find_latest_subscription_with_plan(user.id).await?
        {
            let (plan_code, plan_name) = plan
                .map(|plan| (plan.code, plan.name))
                .unwrap_or_default();

            return Ok(SubscriptionDto {
                plan_code,
                plan_name,
                status: subscription.status,
                started_at: subscription.started_at,
                expires_at: subscription.expires_at,
            });
        }

        let free = repo
            .find_plan_by_code("free")
            .await?
            .ok_or_else(|| AppError::InternalError("Free plan missing from database".to_string()))?;

        Ok(SubscriptionDto {
            plan_code: free.code,
            plan_name: free.name,
            status: SubscriptionStatus::Active.as_str().to_string(),
            started_at: None,
            expires_at: None,
        })
    }

    /// Starts an upgrade: creates the pending subscription and payment row
    /// the confirm callback will later resolve.
    pub async fn upgrade(&self, uid: &str, plan_code: &str) -> Result<UpgradeResultDto, AppError> {
        let user = self.find_user(uid).await?;
        let repo = BillingRepository::new(self.db);

        let plan = repo
            .find_plan_by_code(plan_code)
            .await?
            .ok_or_else(|| AppError::BadRequest("존재하지 않는 플랜입니다.".to_string()))?;

        if plan.price_krw <= 0 {
            return Err(AppError::BadRequest(
                "무료 플랜은 결제가 필요하지 않습니다.".to_string(),
            ));
        }

        let subscription = repo.create_pending_subscription(user.id, plan.id).await?;

        let order_id = format!("maum-{}", Uuid::new_v4().simple());
        let payment = repo
            .create_payment(user.id, subscription.id, order_id, plan.price_krw)
            .await?;

        Ok(UpgradeResultDto {
            order_id: payment.order_id,
            amount: payment.amount,
        })
    }

    /// Cancels the user's active subscription. Access already paid for is
    /// kept until `expires_at`; only the status changes.
    pub async fn cancel(&self, uid: &str) -> Result<SubscriptionDto, AppError> {
        let user = self.find_user(uid).await?;
        let repo = BillingRepository::new(self.db);

        let Some((subscription, plan)) = repo.find_latest_subscription_with_plan(user.id).await?
        else {
            return Err(AppError::BadRequest("취소할 구독이 없습니다.".to_string()));
        };

        if subscription.status != SubscriptionStatus::Active.as_str() {
            return Err(AppError::BadRequest("취소할 구독이 없습니다.".to_string()));
        }

        let canceled = repo.cancel_subscription(subscription).await?;

        self.mirror
            .mirror_subscription(uid, &canceled.status, canceled.expires_at)
            .await;

        let (plan_code, plan_name) = plan.map(|plan| (plan.code, plan.name)).unwrap_or_default();

        Ok(SubscriptionDto {
            plan_code,
            plan_name,
            status: canceled.status,
            started_at: canceled.started_at,
            expires_at: canceled.expires_at,
        })
    }

    /// Resolves the provider confirm callback.
    ///
    /// The callback amount must equal the amount stored at checkout. On
    /// provider approval the payment is confirmed and the subscription
    /// activated for the plan's period; on provider rejection the payment is
    /// marked failed and the provider message is surfaced. Re-confirming an
    /// already-confirmed order is a no-op returning the current state.
    pub async fn confirm(
        &self,
        payment_key: &str,
        order_id: &str,
        amount: i32,
    ) -> Result<PaymentResultDto, AppError> {
        let repo = BillingRepository::new(self.db);

        let payment = repo
            .find_payment_by_order_id(order_id)
            .await?
            .ok_or_else(|| AppError::NotFound("주문을 찾을 수 없습니다.".to_string()))?;

        if payment.status == PaymentStatus::Confirmed.as_str() {
            return Ok(payment_to_result_dto(payment));
        }

        if payment.amount != amount {
            return Err(BillingError::AmountMismatch {
                expected: payment.amount,
                actual: amount,
            }
            .into());
        }

        match self.toss.confirm(payment_key, order_id, amount).await {
            Ok(response) => {
                tracing::debug!("Toss confirm for {}: {}", order_id, response.status);

                let now = Utc::now();
                let confirmed = repo
                    .mark_payment_confirmed(payment, payment_key.to_string(), now)
                    .await?;

                if let Some(subscription_id) = confirmed.subscription_id {
                    self.activate(subscription_id, confirmed.user_id).await?;
                }

                Ok(payment_to_result_dto(confirmed))
            }
            Err(e @ AppError::BillingErr(_)) => {
                repo.mark_payment_failed(payment).await?;
                Err(e)
            }
            // Transport failures leave the payment in "ready" so the client
            // can repeat the confirm callback.
            Err(e) => Err(e),
        }
    }

    async fn activate(&self, subscription_id: i32, user_id: i32) -> Result<(), AppError> {
        let repo = BillingRepository::new(self.db);

        let Some(subscription) = repo.find_subscription_by_id(subscription_id).await? else {
            return Err(AppError::InternalError(format!(
                "Payment references missing subscription {}",
                subscription_id
            )));
        };

        let plan = repo
            .find_plan_by_id(subscription.plan_id)
            .await?
            .ok_or_else(|| {
                AppError::InternalError(format!(
                    "Subscription {} references missing plan {}",
                    subscription.id, subscription.plan_id
                ))
            })?;

        let now = Utc::now();
        let expires_at = now + Duration::days(i64::from(plan.period_days));
        let activated = repo
            .activate_subscription(subscription, now, expires_at)
            .await?;

        if let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? {
            self.mirror
                .mirror_subscription(&user.uid, &activated.status, activated.expires_at)
                .await;
        }

        Ok(())
    }

    async fn find_user(&self, uid: &str) -> Result<entity::user::Model, AppError> {
        UserRepository::new(self.db)
            .find_by_uid(uid)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다.".to_string()))
    }
}

fn plan_to_dto(plan: entity::subscription_plan::Model) -> PlanDto {
    PlanDto {
        code: plan.code,
        name: plan.name,
        price_krw: plan.price_krw,
        period_days: plan.period_days,
        description: plan.description,
    }
}

fn payment_to_result_dto(payment: entity::payment::Model) -> PaymentResultDto {
    PaymentResultDto {
        order_id: payment.order_id,
        status: payment.status,
        confirmed_at: payment.confirmed_at,
    }
}
