//! User service for business logic.
//!
//! This module provides the `UserService` implementing the user use cases: create,
//! get-by-id, list, update and delete. Each method performs the queries its use case
//! needs on the session it was given and reports failures as typed `AppError`s.

use chrono::{Duration, Utc};
use sea_orm::{ConnectionTrait, DbErr, SqlErr};

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{
        CreateUserParams, ListUsersParams, NewUser, PaginatedUsers, UpdateUserParams, User,
        UserActivity, UserChanges,
    },
    util::password::{hash_password, verify_password},
};

const USER_NOT_FOUND: &str = "User not found";
const EMAIL_TAKEN: &str = "User with this email already exists";
const USERNAME_TAKEN: &str = "User with this username already exists";

/// Service providing business logic for user management.
pub struct UserService<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserService<'a, C> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Session transaction (or connection) the service operates on
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a user.
    ///
    /// Checks email and username uniqueness up front so the conflict names the field,
    /// and still maps a unique constraint violation from the insert (a concurrent
    /// request taking the same value) to a conflict.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user with its database-assigned id
    /// - `Err(AppError::Conflict)` - Email or username already in use
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(&self, params: CreateUserParams) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        if repo.find_by_email(&params.email).await?.is_some() {
            return Err(AppError::Conflict(EMAIL_TAKEN.to_string()));
        }
        if repo.find_by_username(&params.username).await?.is_some() {
            return Err(AppError::Conflict(USERNAME_TAKEN.to_string()));
        }

        let user = repo
            .create(NewUser {
                email: params.email,
                username: params.username,
                hashed_password: hash_password(&params.password),
            })
            .await
            .map_err(map_write_error)?;

        tracing::info!(user_id = user.id, "Created user");

        Ok(user)
    }

    /// Retrieves a user by id.
    ///
    /// # Returns
    /// - `Ok(User)` - User found
    /// - `Err(AppError::NotFound)` - No user with that id
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn get_by_id(&self, id: i32) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        repo.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(USER_NOT_FOUND.to_string()))
    }

    /// Retrieves one page of users ordered by id.
    ///
    /// # Returns
    /// - `Ok(PaginatedUsers)` - At most `params.limit` users plus pagination metadata
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn list(&self, params: ListUsersParams) -> Result<PaginatedUsers, AppError> {
        let repo = UserRepository::new(self.db);

        let (users, has_more) = repo.get_page(params.offset, params.limit).await?;
        let total = repo.count().await?;

        Ok(PaginatedUsers {
            users,
            total,
            offset: params.offset,
            limit: params.limit,
            has_more,
        })
    }

    /// Applies a partial update to a user.
    ///
    /// Fields absent from `params` are left unchanged. A new password is hashed before
    /// it is stored; a password equal to the current one is not a change.
    ///
    /// # Returns
    /// - `Ok(User)` - The user after the update
    /// - `Err(AppError::NotFound)` - No user with that id
    /// - `Err(AppError::Conflict)` - New email or username belongs to another user
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn update(&self, id: i32, params: UpdateUserParams) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        let Some(stored_hash) = repo.find_hashed_password(id).await? else {
            return Err(AppError::NotFound(USER_NOT_FOUND.to_string()));
        };

        if let Some(email) = &params.email {
            if let Some(other) = repo.find_by_email(email).await? {
                if other.id != id {
                    return Err(AppError::Conflict(EMAIL_TAKEN.to_string()));
                }
            }
        }
        if let Some(username) = &params.username {
            if let Some(other) = repo.find_by_username(username).await? {
                if other.id != id {
                    return Err(AppError::Conflict(USERNAME_TAKEN.to_string()));
                }
            }
        }

        let changes = UserChanges {
            email: params.email,
            username: params.username,
            hashed_password: params
                .password
                .filter(|password| !verify_password(&stored_hash, password))
                .as_deref()
                .map(hash_password),
            is_active: params.is_active,
        };

        let user = repo
            .update(id, changes)
            .await
            .map_err(map_write_error)?
            .ok_or_else(|| AppError::NotFound(USER_NOT_FOUND.to_string()))?;

        tracing::info!(user_id = user.id, "Updated user");

        Ok(user)
    }

    /// Deletes a user.
    ///
    /// # Returns
    /// - `Ok(())` - User deleted
    /// - `Err(AppError::NotFound)` - No user with that id
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = UserRepository::new(self.db);

        if !repo.delete(id).await? {
            return Err(AppError::NotFound(USER_NOT_FOUND.to_string()));
        }

        tracing::info!(user_id = id, "Deleted user");

        Ok(())
    }

    /// Counts all users and active users.
    pub async fn activity(&self) -> Result<UserActivity, AppError> {
        let repo = UserRepository::new(self.db);

        Ok(UserActivity {
            total: repo.count().await?,
            active: repo.count_active().await?,
        })
    }

    /// Counts users created during the last 24 hours.
    pub async fn count_recent_signups(&self) -> Result<u64, AppError> {
        let repo = UserRepository::new(self.db);
        let since = Utc::now() - Duration::days(1);

        Ok(repo.count_created_since(since).await?)
    }
}

/// Maps a failed insert or update to a conflict when a unique constraint rejected it.
pub(super) fn map_write_error(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            AppError::Conflict("User with this email or username already exists".to_string())
        }
        _ => AppError::DbErr(err),
    }
}
