//! User factory for creating test user entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr};

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let user = UserFactory::new(&db)
///     .email("someone@example.com")
///     .username("someone")
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a, C: ConnectionTrait> {
    db: &'a C,
    email: String,
    username: String,
    hashed_password: String,
    is_active: bool,
}

impl<'a, C: ConnectionTrait> UserFactory<'a, C> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - email: `"user{id}@example.com"` where id is auto-incremented
    /// - username: `"user{id}"`
    /// - hashed_password: `"salt$digest"` placeholder (not a usable credential)
    /// - is_active: `true`
    pub fn new(db: &'a C) -> Self {
        let id = next_id();
        Self {
            db,
            email: format!("user{}@example.com", id),
            username: format!("user{}", id),
            hashed_password: "salt$digest".to_string(),
            is_active: true,
        }
    }

    /// Sets the email for the user.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the username for the user.
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    /// Sets the stored password hash for the user.
    pub fn hashed_password(mut self, hashed_password: impl Into<String>) -> Self {
        self.hashed_password = hashed_password.into();
        self
    }

    /// Sets whether the user is active.
    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity with its assigned id
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            email: ActiveValue::Set(self.email),
            username: ActiveValue::Set(self.username),
            hashed_password: ActiveValue::Set(self.hashed_password),
            is_active: ActiveValue::Set(self.is_active),
            created_at: ActiveValue::Set(Utc::now()),
            updated_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user with default values.
///
/// Shorthand for `UserFactory::new(db).build().await`.
pub async fn create_user<C: ConnectionTrait>(db: &C) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}
