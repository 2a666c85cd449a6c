//! Entity factories for tests.
//!
//! Factories create entities with sensible defaults to cut boilerplate.
//! Complex entities use a builder pattern; simple ones are plain functions.

pub mod admin_account;
pub mod chat_message;
pub mod content_item;
pub mod counseling_session;
pub mod emotion_record;
pub mod helpers;
pub mod payment;
pub mod quiz;
pub mod schedule_appointment;
pub mod subscription;
pub mod subscription_plan;
pub mod user;
