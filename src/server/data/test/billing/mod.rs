use crate::server::data::billing::BillingRepository;
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod payments;
mod subscriptions;
