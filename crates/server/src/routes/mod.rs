//! HTTP route handlers for the contacts API.
//!
//! # Route Structure
//!
//! ```text
//! GET    /health              - Liveness check
//! GET    /health/ready        - Readiness check (pings the store)
//!
//! # Person
//! GET    /api/person/{id}     - Fetch a person (age and birthdayToday computed)
//! POST   /api/person          - Create a person (201, no body)
//! PUT    /api/person/{id}     - Full update (name must not change)
//! PATCH  /api/person/{id}     - Rename (name as a query parameter)
//! DELETE /api/person/{id}     - Soft delete
//! ```

pub mod person;

use axum::extract::State;
use axum::http::StatusCode;
use axum::{Router, routing::get};

use crate::state::AppState;

/// Build the full application router.
#[must_use]
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/health/ready", get(readiness))
        .merge(person::router())
        .with_state(state)
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}

/// Readiness health check endpoint.
///
/// Verifies store connectivity before returning OK.
/// Returns 503 Service Unavailable if the store is not reachable.
async fn readiness(State(state): State<AppState>) -> StatusCode {
    match state.store().ping().await {
        Ok(()) => StatusCode::OK,
        Err(_) => StatusCode::SERVICE_UNAVAILABLE,
    }
}
