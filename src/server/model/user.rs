//! User domain models and parameters.
//!
//! Provides the domain model returned by the user service and the validated parameter
//! types built from request DTOs. Parameter constructors are the only way transport
//! input reaches the service layer, and they name every writable field explicitly.

use chrono::{DateTime, Utc};

use crate::{
    model::user::{CreateUserDto, ListUsersQuery, PaginatedUsersDto, UpdateUserDto, UserDto},
    server::{error::validation::ValidationErrors, util::validate},
};

/// Persisted user as seen by the service layer.
///
/// Deliberately omits the password hash, which never leaves the repository.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Identity assigned by the database on insert.
    pub id: i32,
    /// Normalized (trimmed, lowercased) email address, unique across users.
    pub email: String,
    /// Username, unique across users.
    pub username: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    /// Time of the last update that changed a field, if any.
    pub updated_at: Option<DateTime<Utc>>,
}

impl User {
    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
            username: self.username,
            is_active: self.is_active,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            username: entity.username,
            is_active: entity.is_active,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// Validated input for creating a user.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateUserParams {
    pub email: String,
    pub username: String,
    /// Plaintext password; hashed by the service before it is stored.
    pub password: String,
}

impl CreateUserParams {
    /// Validates and normalizes a create request.
    ///
    /// # Returns
    /// - `Ok(CreateUserParams)` - Every field present and valid
    /// - `Err(ValidationErrors)` - One entry per missing or invalid field
    pub fn from_dto(dto: CreateUserDto) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let email = errors
            .require("email", dto.email)
            .and_then(|v| errors.check("email", validate::email(&v)));
        let username = errors
            .require("username", dto.username)
            .and_then(|v| errors.check("username", validate::username(&v)));
        let password = errors
            .require("password", dto.password)
            .and_then(|v| errors.check("password", validate::password(&v)));

        match (email, username, password) {
            (Some(email), Some(username), Some(password)) if errors.is_empty() => Ok(Self {
                email,
                username,
                password,
            }),
            _ => Err(errors),
        }
    }
}

/// Validated input for a partial user update. `None` leaves the field unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateUserParams {
    pub email: Option<String>,
    pub username: Option<String>,
    /// Plaintext replacement password; hashed by the service before it is stored.
    pub password: Option<String>,
    pub is_active: Option<bool>,
}

impl UpdateUserParams {
    /// Validates and normalizes the fields present in an update request.
    pub fn from_dto(dto: UpdateUserDto) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let email = errors.check_optional("email", dto.email.map(|v| validate::email(&v)));
        let username =
            errors.check_optional("username", dto.username.map(|v| validate::username(&v)));
        let password =
            errors.check_optional("password", dto.password.map(|v| validate::password(&v)));

        match (email, username, password) {
            (Some(email), Some(username), Some(password)) if errors.is_empty() => Ok(Self {
                email,
                username,
                password,
                is_active: dto.is_active,
            }),
            _ => Err(errors),
        }
    }
}

/// Field-level changes handed to the repository for an update.
///
/// Mirrors `UpdateUserParams` with the password already hashed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserChanges {
    pub email: Option<String>,
    pub username: Option<String>,
    pub hashed_password: Option<String>,
    pub is_active: Option<bool>,
}

/// Values for inserting a new user row.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub email: String,
    pub username: String,
    pub hashed_password: String,
}

/// Validated pagination window for listing users.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ListUsersParams {
    /// Number of users to skip, in id order.
    pub offset: u64,
    /// Maximum number of users to return; always within the allowed page size.
    pub limit: u64,
}

impl ListUsersParams {
    /// Validates a listing query, applying defaults for absent values.
    pub fn from_query(query: ListUsersQuery) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let offset = errors.check("offset", validate::page_offset(query.offset));
        let limit = errors.check("limit", validate::page_limit(query.limit));

        match (offset, limit) {
            (Some(offset), Some(limit)) if errors.is_empty() => Ok(Self { offset, limit }),
            _ => Err(errors),
        }
    }
}

/// One page of users with pagination metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedUsers {
    /// Users for this page, ordered by id.
    pub users: Vec<User>,
    /// Total number of users across all pages.
    pub total: u64,
    pub offset: u64,
    pub limit: u64,
    /// Whether at least one user exists past this page.
    pub has_more: bool,
}

impl PaginatedUsers {
    /// Converts the paginated users domain model to a DTO for API responses.
    pub fn into_dto(self) -> PaginatedUsersDto {
        PaginatedUsersDto {
            users: self.users.into_iter().map(User::into_dto).collect(),
            total: self.total,
            offset: self.offset,
            limit: self.limit,
            has_more: self.has_more,
        }
    }
}

/// Snapshot of user counts reported by scheduled jobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserActivity {
    pub total: u64,
    pub active: u64,
}
