use crate::server::data::content::ContentRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod crud;
