//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a user together with an active premium subscription.
///
/// Convenience for billing tests that need the whole chain: user, plan, and
/// subscription.
///
/// # Returns
/// - `Ok((user, plan, subscription))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_user_with_subscription(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::subscription_plan::Model,
        entity::subscription::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let plan = crate::factory::subscription_plan::create_plan(db, 9900, 30).await?;
    let subscription =
        crate::factory::subscription::create_active_subscription(db, user.id, plan.id).await?;

    Ok((user, plan, subscription))
}
