use axum::{routing::get, Router};

pub mod courses;
pub mod enrollments;
pub mod students;
pub mod system;

/// Router for all resource endpoints.
///
/// Unknown paths and known paths hit with an unsupported method both answer
/// with the JSON 404.
pub fn router() -> Router {
    Router::new()
        .route("/health", get(system::health))
        .nest("/students", students::router())
        .nest("/courses", courses::router())
        .method_not_allowed_fallback(system::not_found)
        .fallback(system::not_found)
}
