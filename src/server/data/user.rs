//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records in the database.
//! It handles inserts, lookups, paginated listing, partial updates and deletes, with
//! explicit field-by-field mapping between parameter models and the entity's active model.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::user::{NewUser, User, UserChanges};

/// Repository providing database operations for user management.
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Connection or session transaction to run queries on
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new user.
    ///
    /// The id is assigned by the database; `is_active` defaults to true and
    /// `created_at` is stamped with the current time.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user with its assigned id
    /// - `Err(DbErr)` - Database error, including unique constraint violations on
    ///   email or username
    pub async fn create(&self, new_user: NewUser) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            email: ActiveValue::Set(new_user.email),
            username: ActiveValue::Set(new_user.username),
            hashed_password: ActiveValue::Set(new_user.hashed_password),
            is_active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(Utc::now()),
            updated_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds a user by id.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(id).one(self.db).await?;

        Ok(entity.map(User::from_entity))
    }

    /// Gets the stored password hash of a user.
    ///
    /// # Returns
    /// - `Ok(Some(String))` - Hash of the user's current password
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_hashed_password(&self, id: i32) -> Result<Option<String>, DbErr> {
        let entity = entity::prelude::User::find_by_id(id).one(self.db).await?;

        Ok(entity.map(|model| model.hashed_password))
    }

    /// Finds a user by normalized email address.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user by username.
    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Gets one window of users ordered by id.
    ///
    /// Fetches one row past `limit` to learn whether another page exists without a
    /// second query.
    ///
    /// # Arguments
    /// - `offset` - Number of users to skip
    /// - `limit` - Maximum number of users to return
    ///
    /// # Returns
    /// - `Ok((users, has_more))` - Users in the window and whether more follow
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_page(&self, offset: u64, limit: u64) -> Result<(Vec<User>, bool), DbErr> {
        let mut entities = entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Id)
            .offset(offset)
            .limit(limit.saturating_add(1))
            .all(self.db)
            .await?;

        let has_more = entities.len() as u64 > limit;
        entities.truncate(limit as usize);

        Ok((entities.into_iter().map(User::from_entity).collect(), has_more))
    }

    /// Counts all users.
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::User::find().count(self.db).await
    }

    /// Counts users flagged active.
    pub async fn count_active(&self) -> Result<u64, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::IsActive.eq(true))
            .count(self.db)
            .await
    }

    /// Counts users created at or after `since`.
    pub async fn count_created_since(&self, since: DateTime<Utc>) -> Result<u64, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::CreatedAt.gte(since))
            .count(self.db)
            .await
    }

    /// Applies the present fields of `changes` to a user.
    ///
    /// Only fields whose value actually differs are written. `updated_at` is stamped
    /// when at least one field changed; an update that changes nothing leaves the row
    /// untouched, so repeating the same update is a no-op.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The user after the update
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error, including unique constraint violations
    pub async fn update(&self, id: i32, changes: UserChanges) -> Result<Option<User>, DbErr> {
        let Some(model) = entity::prelude::User::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::user::ActiveModel = model.clone().into();
        let mut changed = false;

        if let Some(email) = changes.email.filter(|v| *v != model.email) {
            active_model.email = ActiveValue::Set(email);
            changed = true;
        }
        if let Some(username) = changes.username.filter(|v| *v != model.username) {
            active_model.username = ActiveValue::Set(username);
            changed = true;
        }
        if let Some(hashed_password) = changes.hashed_password {
            active_model.hashed_password = ActiveValue::Set(hashed_password);
            changed = true;
        }
        if let Some(is_active) = changes.is_active.filter(|v| *v != model.is_active) {
            active_model.is_active = ActiveValue::Set(is_active);
            changed = true;
        }

        if !changed {
            return Ok(Some(User::from_entity(model)));
        }

        active_model.updated_at = ActiveValue::Set(Some(Utc::now()));
        let entity = active_model.update(self.db).await?;

        Ok(Some(User::from_entity(entity)))
    }

    /// Deletes a user by id.
    ///
    /// # Returns
    /// - `Ok(true)` - A user was deleted
    /// - `Ok(false)` - No user with that id
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::User::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
