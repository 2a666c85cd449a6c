//! Cron jobs for automated maintenance tasks.

pub mod subscription_expiry;
