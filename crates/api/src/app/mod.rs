//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: the shared store and its logged operations
//! - `routes/`: HTTP routes + handlers (one file per resource)
//! - `dto.rs`: query DTOs and JSON mapping helpers
//! - `errors.rs`: consistent `{ "error": ... }` responses

use std::sync::Arc;

use axum::{Extension, Router};
use tower::ServiceBuilder;

use school_infra::SchoolStore;

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router around a store (public entrypoint used by `main.rs`).
pub fn build_app(store: SchoolStore) -> Router {
    let services = Arc::new(services::AppServices::new(store));

    routes::router().layer(
        ServiceBuilder::new()
            .layer(axum::middleware::from_fn(middleware::request_logging))
            .layer(Extension(services)),
    )
}
