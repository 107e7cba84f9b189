//! Shared helper utilities for factory methods.

use sea_orm::{ConnectionTrait, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Values increase monotonically across all factories in the process, keeping
/// unique columns such as email and username collision-free.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates `count` users with default values.
///
/// # Arguments
/// - `db` - Database connection or transaction
/// - `count` - Number of users to insert
///
/// # Returns
/// - `Ok(Vec<entity::user::Model>)` - Created users in insertion order
/// - `Err(DbErr)` - Database error during creation
pub async fn create_users<C: ConnectionTrait>(
    db: &C,
    count: usize,
) -> Result<Vec<entity::user::Model>, DbErr> {
    let mut users = Vec::with_capacity(count);
    for _ in 0..count {
        users.push(crate::factory::user::create_user(db).await?);
    }
    Ok(users)
}
