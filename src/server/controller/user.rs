use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use crate::{
    model::user::{CreateUserDto, ListUsersQuery, UpdateUserDto},
    server::{
        error::AppError,
        model::user::{CreateUserParams, ListUsersParams, UpdateUserParams},
        service::user::UserService,
        state::AppState,
    },
};

/// User resource routes mounted under `prefix`.
///
/// The collection is reachable with and without a trailing slash.
pub fn routes(prefix: &str) -> Router<AppState> {
    let collection = format!("{prefix}/users");

    Router::new()
        .route(&collection, get(list_users).post(create_user))
        .route(&format!("{collection}/"), get(list_users).post(create_user))
        .route(
            &format!("{collection}/{{id}}"),
            get(get_user).put(update_user).delete(delete_user),
        )
}

/// Create a new user.
///
/// # Arguments
/// - `state` - Application state providing database sessions
/// - `payload` - User creation data (email, username, password)
///
/// # Returns
/// - `201 Created` - The created user
/// - `400 Bad Request` - Malformed body or invalid fields
/// - `409 Conflict` - Email or username already in use
/// - `500 Internal Server Error` - Database error
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<CreateUserDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let params = CreateUserParams::from_dto(payload)?;

    let user = state
        .sessions
        .run(|txn| Box::pin(async move { UserService::new(txn).create(params).await }))
        .await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// Get a page of users ordered by id.
///
/// # Arguments
/// - `state` - Application state providing database sessions
/// - `query` - Pagination window (`offset`, `limit`)
///
/// # Returns
/// - `200 OK` - Page of users with the total count and whether more follow
/// - `400 Bad Request` - Invalid pagination values
/// - `500 Internal Server Error` - Database error
pub async fn list_users(
    State(state): State<AppState>,
    query: Result<Query<ListUsersQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(query) = query?;
    let params = ListUsersParams::from_query(query)?;

    let page = state
        .sessions
        .run(|txn| Box::pin(async move { UserService::new(txn).list(params).await }))
        .await?;

    Ok((StatusCode::OK, Json(page.into_dto())))
}

/// Get a user by id.
///
/// # Returns
/// - `200 OK` - The user
/// - `400 Bad Request` - Id is not an integer
/// - `404 Not Found` - No user with that id
/// - `500 Internal Server Error` - Database error
pub async fn get_user(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;

    let user = state
        .sessions
        .run(|txn| Box::pin(async move { UserService::new(txn).get_by_id(id).await }))
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Apply a partial update to a user.
///
/// Only fields present in the body change; repeating the same request is a no-op.
///
/// # Returns
/// - `200 OK` - The user after the update
/// - `400 Bad Request` - Malformed body, invalid fields or non-integer id
/// - `404 Not Found` - No user with that id
/// - `409 Conflict` - Email or username belongs to another user
/// - `500 Internal Server Error` - Database error
pub async fn update_user(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<UpdateUserDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;
    let Json(payload) = payload?;
    let params = UpdateUserParams::from_dto(payload)?;

    let user = state
        .sessions
        .run(|txn| Box::pin(async move { UserService::new(txn).update(id, params).await }))
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Delete a user.
///
/// # Returns
/// - `204 No Content` - User deleted
/// - `400 Bad Request` - Id is not an integer
/// - `404 Not Found` - No user with that id
/// - `500 Internal Server Error` - Database error
pub async fn delete_user(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;

    state
        .sessions
        .run(|txn| Box::pin(async move { UserService::new(txn).delete(id).await }))
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
