//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into HTTP responses. The `AppError` enum is the top-level error
//! type returned by services and controllers; its `IntoResponse` implementation is the
//! only place where an error becomes a status code and a response body.

pub mod config;
pub mod validation;

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, validation::ValidationErrors},
};

/// Top-level application error type.
///
/// Typed failures (`Validation`, `NotFound`, `Conflict`) carry a client-safe message.
/// Everything else is an infrastructure failure whose detail is logged server-side and
/// replaced by a generic message in the response.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Input rejected by schema validation.
    ///
    /// Results in 400 Bad Request listing every rejected field.
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    /// Database operation error from SeaORM.
    ///
    /// Results in 503 Service Unavailable when no pooled connection could be acquired
    /// in time, otherwise 500 Internal Server Error. Details are logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Cron scheduler error.
    ///
    /// Only raised while registering or starting scheduled jobs.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// I/O error while binding or serving the HTTP listener.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// Uniqueness or integrity constraint would be violated.
    ///
    /// Results in 409 Conflict with the provided error message.
    #[error("{0}")]
    Conflict(String),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(ValidationErrors::single("body", rejection.body_text()))
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::Validation(ValidationErrors::single("query", rejection.body_text()))
    }
}

impl From<PathRejection> for AppError {
    fn from(_: PathRejection) -> Self {
        AppError::Validation(ValidationErrors::single("id", "must be an integer"))
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `Validation`, with one `details` entry per rejected field
/// - 404 Not Found - For `NotFound`
/// - 409 Conflict - For `Conflict`
/// - 503 Service Unavailable - For a database connection that could not be acquired
/// - 500 Internal Server Error - For all other error types
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(errors) => {
                tracing::debug!("Rejected request: {}", errors);
                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorDto {
                        error: "Validation failed".to_string(),
                        details: errors.into_dto(),
                    }),
                )
                    .into_response()
            }
            Self::NotFound(msg) => error_response(StatusCode::NOT_FOUND, msg),
            Self::Conflict(msg) => error_response(StatusCode::CONFLICT, msg),
            Self::DbErr(err @ sea_orm::DbErr::ConnectionAcquire(_)) => {
                tracing::error!("Database connection unavailable: {}", err);
                error_response(
                    StatusCode::SERVICE_UNAVAILABLE,
                    "Service temporarily unavailable".to_string(),
                )
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

fn error_response(status: StatusCode, error: String) -> Response {
    (
        status,
        Json(ErrorDto {
            error,
            details: Vec::new(),
        }),
    )
        .into_response()
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details such as raw database error text.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal server error".to_string(),
        )
    }
}
