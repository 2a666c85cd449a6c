use crate::server::data::admin::AdminRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod accounts;
mod permissions;
