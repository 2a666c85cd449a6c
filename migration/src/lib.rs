pub use sea_orm_migration::prelude::*;

mod m20260105_000001_create_user_table;
mod m20260105_000002_create_emotion_record_table;
mod m20260105_000003_create_counseling_session_table;
mod m20260105_000004_create_chat_message_table;
mod m20260106_000005_create_schedule_appointment_table;
mod m20260106_000006_create_quiz_table;
mod m20260106_000007_create_quiz_result_table;
mod m20260107_000008_create_content_item_table;
mod m20260107_000009_create_admin_account_table;
mod m20260107_000010_create_admin_permission_table;
mod m20260108_000011_create_subscription_plan_table;
mod m20260108_000012_create_subscription_table;
mod m20260108_000013_create_payment_table;
mod m20260108_000014_seed_subscription_plans;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260105_000001_create_user_table::Migration),
            Box::new(m20260105_000002_create_emotion_record_table::Migration),
            Box::new(m20260105_000003_create_counseling_session_table::Migration),
            Box::new(m20260105_000004_create_chat_message_table::Migration),
            Box::new(m20260106_000005_create_schedule_appointment_table::Migration),
            Box::new(m20260106_000006_create_quiz_table::Migration),
            Box::new(m20260106_000007_create_quiz_result_table::Migration),
            Box::new(m20260107_000008_create_content_item_table::Migration),
            Box::new(m20260107_000009_create_admin_account_table::Migration),
            Box::new(m20260107_000010_create_admin_permission_table::Migration),
            Box::new(m20260108_000011_create_subscription_plan_table::Migration),
            Box::new(m20260108_000012_create_subscription_table::Migration),
            Box::new(m20260108_000013_create_payment_table::Migration),
            Box::new(m20260108_000014_seed_subscription_plans::Migration),
        ]
    }
}
