//! Enrollment endpoints, mounted under `/courses/:id/students/:student_id`.

use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use school_core::DomainError;
use school_infra::store::messages;

use crate::app::errors;
use crate::app::routes::{courses::parse_course_id, students::parse_student_id};
use crate::app::services::AppServices;

/// POST /courses/:courseId/students/:studentId
pub async fn enroll(
    Extension(services): Extension<Arc<AppServices>>,
    Path((course_id, student_id)): Path<(String, String)>,
) -> axum::response::Response {
    let result = parse_course_id(&course_id).and_then(|course_id| {
        let student_id = parse_student_id(&student_id)?;
        services.enroll(student_id, course_id)
    });
    match result {
        Ok(()) => (
            StatusCode::CREATED,
            Json(serde_json::json!({ "success": true })),
        )
            .into_response(),
        Err(e) => errors::enrollment_error_to_response(e),
    }
}

/// DELETE /courses/:courseId/students/:studentId
pub async fn unenroll(
    Extension(services): Extension<Arc<AppServices>>,
    Path((course_id, student_id)): Path<(String, String)>,
) -> axum::response::Response {
    let ids = parse_course_id(&course_id).and_then(|c| Ok((c, parse_student_id(&student_id)?)));
    let result = match ids {
        Ok((course_id, student_id)) => services.unenroll(student_id, course_id),
        // Unknown ids cannot have an enrollment.
        Err(_) => Err(DomainError::not_found(messages::ENROLLMENT_NOT_FOUND)),
    };
    match result {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
