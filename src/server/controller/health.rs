use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};

use crate::{
    model::api::{GreetingDto, HealthDto},
    server::state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
}

/// Static greeting naming the application and its version.
///
/// # Returns
/// - `200 OK` - Greeting payload
pub async fn root(State(state): State<AppState>) -> impl IntoResponse {
    Json(GreetingDto {
        message: format!("Welcome to {} API", state.config.app_name),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Liveness check.
///
/// Reports healthy when the database answers a ping.
///
/// # Returns
/// - `200 OK` - `{"status": "healthy"}`
/// - `503 Service Unavailable` - `{"status": "unhealthy"}`
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    match state.sessions.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(HealthDto {
                status: "healthy".to_string(),
            }),
        ),
        Err(e) => {
            tracing::warn!("Health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthDto {
                    status: "unhealthy".to_string(),
                }),
            )
        }
    }
}
