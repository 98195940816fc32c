use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Extension, Path, Query,
    },
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use school_core::{CourseId, DomainError};
use school_courses::{Course, CoursePatch, NewCourse};
use school_infra::Record;

use crate::app::routes::{enrollments, system};
use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_courses).post(create_course))
        .route(
            "/:id",
            get(get_course).put(update_course).delete(delete_course),
        )
        .route(
            "/:id/students/:student_id",
            post(enrollments::enroll).delete(enrollments::unenroll),
        )
        .method_not_allowed_fallback(system::not_found)
}

/// Unparsable ids cannot name an existing course.
pub(crate) fn parse_course_id(raw: &str) -> Result<CourseId, DomainError> {
    raw.parse()
        .map_err(|_| DomainError::not_found(<Course as Record>::NOT_FOUND))
}

/// GET /courses?title=&teacher=&page=&limit=
pub async fn list_courses(
    Extension(services): Extension<Arc<AppServices>>,
    query: Result<Query<dto::CourseListQuery>, QueryRejection>,
) -> axum::response::Response {
    // A query string that does not deserialize lists unfiltered, like bad paging values.
    let query = query.map(|Query(q)| q).unwrap_or_default();
    let (filter, pagination) = query.into_parts();
    let page = services.list::<Course>(&filter, pagination);
    (StatusCode::OK, Json(dto::course_page_to_json(page))).into_response()
}

pub async fn get_course(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let detail = parse_course_id(&id).and_then(|id| services.course_detail(id));
    match detail {
        Ok((course, students)) => (
            StatusCode::OK,
            Json(dto::course_detail_to_json(course, students)),
        )
            .into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn create_course(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<NewCourse>, JsonRejection>,
) -> axum::response::Response {
    let Json(draft) = match body {
        Ok(b) => b,
        Err(rejection) => return errors::json_rejection_to_response(rejection),
    };
    match services.create::<Course>(draft) {
        Ok(course) => (StatusCode::CREATED, Json(course)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn update_course(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    body: Result<Json<CoursePatch>, JsonRejection>,
) -> axum::response::Response {
    let id = match parse_course_id(&id) {
        Ok(id) => id,
        Err(e) => return errors::domain_error_to_response(e),
    };
    let Json(patch) = match body {
        Ok(b) => b,
        Err(rejection) => return errors::json_rejection_to_response(rejection),
    };
    match services.update::<Course>(id, patch) {
        Ok(course) => (StatusCode::OK, Json(course)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn delete_course(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    match parse_course_id(&id).and_then(|id| services.remove::<Course>(id)) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
