use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Extension, Path, Query,
    },
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use school_core::{DomainError, StudentId};
use school_infra::Record;
use school_students::{NewStudent, Student, StudentPatch};

use crate::app::routes::system;
use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_students).post(create_student))
        .route(
            "/:id",
            get(get_student).put(update_student).delete(delete_student),
        )
        .method_not_allowed_fallback(system::not_found)
}

/// Unparsable ids cannot name an existing student.
pub(crate) fn parse_student_id(raw: &str) -> Result<StudentId, DomainError> {
    raw.parse()
        .map_err(|_| DomainError::not_found(<Student as Record>::NOT_FOUND))
}

/// GET /students?name=&email=&page=&limit=
pub async fn list_students(
    Extension(services): Extension<Arc<AppServices>>,
    query: Result<Query<dto::StudentListQuery>, QueryRejection>,
) -> axum::response::Response {
    // A query string that does not deserialize lists unfiltered, like bad paging values.
    let query = query.map(|Query(q)| q).unwrap_or_default();
    let (filter, pagination) = query.into_parts();
    let page = services.list::<Student>(&filter, pagination);
    (StatusCode::OK, Json(dto::student_page_to_json(page))).into_response()
}

pub async fn get_student(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let detail = parse_student_id(&id).and_then(|id| services.student_detail(id));
    match detail {
        Ok((student, courses)) => (
            StatusCode::OK,
            Json(dto::student_detail_to_json(student, courses)),
        )
            .into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn create_student(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<NewStudent>, JsonRejection>,
) -> axum::response::Response {
    let Json(draft) = match body {
        Ok(b) => b,
        Err(rejection) => return errors::json_rejection_to_response(rejection),
    };
    match services.create::<Student>(draft) {
        Ok(student) => (StatusCode::CREATED, Json(student)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn update_student(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    body: Result<Json<StudentPatch>, JsonRejection>,
) -> axum::response::Response {
    let id = match parse_student_id(&id) {
        Ok(id) => id,
        Err(e) => return errors::domain_error_to_response(e),
    };
    let Json(patch) = match body {
        Ok(b) => b,
        Err(rejection) => return errors::json_rejection_to_response(rejection),
    };
    match services.update::<Student>(id, patch) {
        Ok(student) => (StatusCode::OK, Json(student)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn delete_student(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    match parse_student_id(&id).and_then(|id| services.remove::<Student>(id)) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
