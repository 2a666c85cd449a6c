//! Subscription plan, subscription, and payment repository.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::model::billing::{PaymentStatus, SubscriptionStatus};

pub struct BillingRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BillingRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list_plans(&self) -> Result<Vec<entity::subscription_plan::Model>, DbErr> {
        entity::prelude::SubscriptionPlan::find()
            .order_by_asc(entity::subscription_plan::Column::PriceKrw)
            .all(self.db)
            .await
    }

    pub async fn find_plan_by_code(
        &self,
        code: &str,
    ) -> Result<Option<entity::subscription_plan::Model>, DbErr> {
        entity::prelude::SubscriptionPlan::find()
            .filter(entity::subscription_plan::Column::Code.eq(code))
            .one(self.db)
            .await
    }

    pub async fn find_plan_by_id(
        &self,
        id: i32,
    ) -> Result<Option<entity::subscription_plan::Model>, DbErr> {
        entity::prelude::SubscriptionPlan::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Gets the user's most recent subscription together with its plan.
    pub async fn find_latest_subscription_with_plan(
        &self,
        user_id: i32,
    ) -> Result<
        Option<(
            entity::subscription::Model,
            Option<entity::subscription_plan::Model>,
        )>,
        DbErr,
    > {
        entity::prelude::Subscription::find()
            .filter(entity::subscription::Column::UserId.eq(user_id))
            .find_also_related(entity::prelude::SubscriptionPlan)
            .order_by_desc(entity::subscription::Column::Id)
            .one(self.db)
            .await
    }

    pub async fn find_subscription_by_id(
        &self,
        id: i32,
    ) -> Result<Option<entity::subscription::Model>, DbErr> {
        entity::prelude::Subscription::find_by_id(id)
            .one(self.db)
            .await
    }

    pub async fn create_pending_subscription(
        &self,
        user_id: i32,
        plan_id: i32,
    ) -> Result<entity::subscription::Model, DbErr> {
        entity::subscription::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            plan_id: ActiveValue::Set(plan_id),
            status: ActiveValue::Set(SubscriptionStatus::Pending.as_str().to_string()),
            started_at: ActiveValue::Set(None),
            expires_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn activate_subscription(
        &self,
        subscription: entity::subscription::Model,
        started_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
    ) -> Result<entity::subscription::Model, DbErr> {
        let mut active = subscription.into_active_model();
        active.status = ActiveValue::Set(SubscriptionStatus::Active.as_str().to_string());
        active.started_at = ActiveValue::Set(Some(started_at));
        active.expires_at = ActiveValue::Set(Some(expires_at));

        active.update(self.db).await
    }

    pub async fn cancel_subscription(
        &self,
        subscription: entity::subscription::Model,
    ) -> Result<entity::subscription::Model, DbErr> {
        let mut active = subscription.into_active_model();
        active.status = ActiveValue::Set(SubscriptionStatus::Canceled.as_str().to_string());

        active.update(self.db).await
    }

    /// Marks every active subscription past its expiry as expired.
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)` - The subscriptions that were transitioned
    pub async fn expire_overdue(
        &self,
        now: DateTime<Utc>,
    ) -> Result<Vec<entity::subscription::Model>, DbErr> {
        let overdue = entity::prelude::Subscription::find()
            .filter(
                entity::subscription::Column::Status.eq(SubscriptionStatus::Active.as_str()),
            )
            .filter(entity::subscription::Column::ExpiresAt.lte(now))
            .all(self.db)
            .await?;

        let mut expired = Vec::with_capacity(overdue.len());
        for subscription in overdue {
            let mut active = subscription.into_active_model();
            active.status = ActiveValue::Set(SubscriptionStatus::Expired.as_str().to_string());
            expired.push(active.update(self.db).await?);
        }

        Ok(expired)
    }

    pub async fn create_payment(
        &self,
        user_id: i32,
        subscription_id: i32,
        order_id: String,
        amount: i32,
    ) -> Result<entity::payment::Model, DbErr> {
        entity::payment::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            subscription_id: ActiveValue::Set(Some(subscription_id)),
            order_id: ActiveValue::Set(order_id),
            payment_key: ActiveValue::Set(None),
            amount: ActiveValue::Set(amount),
            status: ActiveValue::Set(PaymentStatus::Ready.as_str().to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            confirmed_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_payment_by_order_id(
        &self,
        order_id: &str,
    ) -> Result<Option<entity::payment::Model>, DbErr> {
        entity::prelude::Payment::find()
            .filter(entity::payment::Column::OrderId.eq(order_id))
            .one(self.db)
            .await
    }

    pub async fn mark_payment_confirmed(
        &self,
        payment: entity::payment::Model,
        payment_key: String,
        confirmed_at: DateTime<Utc>,
    ) -> Result<entity::payment::Model, DbErr> {
        let mut active = payment.into_active_model();
        active.status = ActiveValue::Set(PaymentStatus::Confirmed.as_str().to_string());
        active.payment_key = ActiveValue::Set(Some(payment_key));
        active.confirmed_at = ActiveValue::Set(Some(confirmed_at));

        active.update(self.db).await
    }

    pub async fn mark_payment_failed(
        &self,
        payment: entity::payment::Model,
    ) -> Result<entity::payment::Model, DbErr> {
        let mut active = payment.into_active_model();
        active.status = ActiveValue::Set(PaymentStatus::Failed.as_str().to_string());

        active.update(self.db).await
    }
}
