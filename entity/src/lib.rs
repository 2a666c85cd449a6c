pub mod prelude;

pub mod admin_account;
pub mod admin_permission;
pub mod chat_message;
pub mod content_item;
pub mod counseling_session;
pub mod emotion_record;
pub mod payment;
pub mod quiz;
pub mod quiz_result;
pub mod schedule_appointment;
pub mod subscription;
pub mod subscription_plan;
pub mod user;
