//! Prompt optimizer HTTP API server (Axum).
//!
//! Provides REST endpoints for prompt optimization, the preset catalog,
//! and health monitoring.

pub mod error;
pub mod routes;
pub mod state;
pub mod validate;

use axum::Router;
use state::AppState;

/// Build the application router with all routes.
pub fn app() -> Router {
    let state = AppState::new();
    app_with_state(state)
}

/// Build the application router with a custom state.
pub fn app_with_state(state: AppState) -> Router {
    Router::new()
        .merge(routes::health_routes())
        .merge(routes::config_routes())
        .merge(routes::optimization_routes())
        .with_state(state)
}
