use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use school_core::{CourseId, DomainResult, StudentId};
use school_courses::Course;
use school_infra::{Page, Pagination, Record, SchoolStore};
use school_students::Student;

/// Shared application state: the store behind a lock.
///
/// Each call takes the lock once and runs a single store operation to
/// completion, so handlers never observe a half-applied change.
#[derive(Debug, Default)]
pub struct AppServices {
    store: RwLock<SchoolStore>,
}

impl AppServices {
    pub fn new(store: SchoolStore) -> Self {
        Self {
            store: RwLock::new(store),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, SchoolStore> {
        self.store.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, SchoolStore> {
        self.store.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn list<R: Record>(&self, filter: &R::Filter, pagination: Pagination) -> Page<R> {
        let page = self.read().list::<R>(filter, pagination);
        tracing::debug!(
            kind = R::KIND,
            total = page.total,
            returned = page.items.len(),
            page = pagination.page,
            limit = pagination.limit,
            "listed records"
        );
        page
    }

    pub fn get<R: Record>(&self, id: R::Id) -> DomainResult<R> {
        self.read().get::<R>(id)
    }

    pub fn create<R: Record>(&self, draft: R::Draft) -> DomainResult<R> {
        let result = self.write().create::<R>(draft);
        match &result {
            Ok(r) => tracing::info!(kind = R::KIND, id = %r.id(), "record created"),
            Err(e) => tracing::warn!(kind = R::KIND, error = %e, "create rejected"),
        }
        result
    }

    pub fn update<R: Record>(&self, id: R::Id, patch: R::Patch) -> DomainResult<R> {
        let result = self.write().update::<R>(id, patch);
        match &result {
            Ok(_) => tracing::info!(kind = R::KIND, %id, "record updated"),
            Err(e) => tracing::warn!(kind = R::KIND, %id, error = %e, "update rejected"),
        }
        result
    }

    pub fn remove<R: Record>(&self, id: R::Id) -> DomainResult<()> {
        let result = self.write().remove::<R>(id);
        match &result {
            Ok(()) => tracing::info!(kind = R::KIND, %id, "record removed"),
            Err(e) => tracing::warn!(kind = R::KIND, %id, error = %e, "remove rejected"),
        }
        result
    }

    /// A student together with the courses they take.
    pub fn student_detail(&self, id: StudentId) -> DomainResult<(Student, Vec<Course>)> {
        let store = self.read();
        let student = store.get::<Student>(id)?;
        let courses = store.courses_of(id)?;
        Ok((student, courses))
    }

    /// A course together with its enrolled students.
    pub fn course_detail(&self, id: CourseId) -> DomainResult<(Course, Vec<Student>)> {
        let store = self.read();
        let course = store.get::<Course>(id)?;
        let students = store.students_of(id)?;
        Ok((course, students))
    }

    pub fn enroll(&self, student_id: StudentId, course_id: CourseId) -> DomainResult<()> {
        let result = self.write().enroll(student_id, course_id);
        match &result {
            Ok(()) => tracing::info!(%student_id, %course_id, "student enrolled"),
            Err(e) => tracing::warn!(%student_id, %course_id, error = %e, "enrollment rejected"),
        }
        result
    }

    pub fn unenroll(&self, student_id: StudentId, course_id: CourseId) -> DomainResult<()> {
        let result = self.write().unenroll(student_id, course_id);
        match &result {
            Ok(()) => tracing::info!(%student_id, %course_id, "student unenrolled"),
            Err(e) => tracing::warn!(%student_id, %course_id, error = %e, "unenrollment rejected"),
        }
        result
    }
}
