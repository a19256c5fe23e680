//! Delish Storefront library.
//!
//! This crate provides the storefront functionality as a library, allowing
//! the router to be driven in-process by the integration tests as well as by
//! the server binary.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod config;
pub mod error;
pub mod filters;
pub mod routes;
pub mod state;
pub mod storage;
pub mod stores;

use axum::{Router, routing::get};
use tower_http::{services::ServeDir, trace::TraceLayer};

use state::AppState;

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running.
async fn health() -> &'static str {
    "ok"
}

/// Build the full application router over a prepared state.
#[must_use]
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(routes::routes())
        .nest_service("/static", ServeDir::new("crates/storefront/static"))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
