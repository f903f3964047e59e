//! Axum router configuration for all endpoints

use axum::{middleware, routing::get, Router};

use crate::server::handlers::{advocates, status};
use crate::server::middleware::request_context_middleware;
use crate::server::state::AppState;

/// Create the application router
pub fn create_router(state: AppState) -> Router {
  Router::new()
    // Status and version endpoints
    .route("/status", get(status::status))
    .route("/version", get(status::version))
    // Advocate directory
    .route("/api/advocates", get(advocates::list_advocates))
    .route("/api/schema", get(advocates::schema))
    .layer(middleware::from_fn(request_context_middleware))
    .with_state(state)
}
