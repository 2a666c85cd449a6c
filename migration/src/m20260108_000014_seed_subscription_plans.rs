use sea_orm_migration::prelude::*;

use super::m20260108_000011_create_subscription_plan_table::SubscriptionPlan;

#[derive(DeriveMigrationName)]
pub struct Migration;

// Launch plans. Prices in KRW; the free plan never goes through checkout but
// keeps plan lookups uniform.
#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let insert = Query::insert()
            .into_table(SubscriptionPlan::Table)
            .columns([
                SubscriptionPlan::Code,
                SubscriptionPlan::Name,
                SubscriptionPlan::PriceKrw,
                SubscriptionPlan::PeriodDays,
                SubscriptionPlan::Description,
            ])
            .values_panic([
                "free".into(),
                "무료 플랜".into(),
                0.into(),
                0.into(),
                "기본 감정 기록 기능".into(),
            ])
            .values_panic([
                "premium".into(),
                "프리미엄 플랜".into(),
                9900.into(),
                30.into(),
                "AI 상담 무제한, 전체 콘텐츠 이용".into(),
            ])
            .to_owned();

        manager.exec_stmt(insert).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let delete = Query::delete()
            .from_table(SubscriptionPlan::Table)
            .cond_where(
                Expr::col(SubscriptionPlan::Code).is_in(["free", "premium"]),
            )
            .to_owned();

        manager.exec_stmt(delete).await
    }
}
