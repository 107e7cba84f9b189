use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::server::{
    config::Config,
    controller::{health, user},
    state::AppState,
};

/// Aggregates every controller's routes.
///
/// Unversioned routes (`/`, `/health`) are mounted at the root; resource routes are
/// mounted under the configured API prefix.
pub fn router(config: &Config) -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(user::routes(&config.api_prefix))
}

/// Builds the complete application with state and HTTP middleware applied.
pub fn app(state: AppState) -> Router {
    router(&state.config)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
