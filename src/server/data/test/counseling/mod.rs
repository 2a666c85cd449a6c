use crate::server::data::counseling::CounselingRepository;
use chrono::Utc;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod messages;
mod sessions;
