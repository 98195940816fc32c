use school_core::{CourseId, DomainError, DomainResult, StudentId};
use school_courses::Course;
use school_students::Student;

use crate::store::{seed, Collection, EnrollmentBook, Page, Pagination, Record};

/// Error messages reported by enrollment operations.
pub mod messages {
    pub const ALREADY_ENROLLED: &str = "Student already enrolled in this course";
    pub const COURSE_FULL: &str = "Course is full";
    pub const ENROLLMENT_NOT_FOUND: &str = "Enrollment not found";
}

/// The whole in-memory dataset: students, courses, and enrollments.
///
/// Every operation runs to completion against `&self`/`&mut self`; callers
/// that share a store across threads wrap it in a lock.
#[derive(Debug, Clone, Default)]
pub struct SchoolStore {
    pub(crate) students: Collection<Student>,
    pub(crate) courses: Collection<Course>,
    pub(crate) enrollments: EnrollmentBook,
}

impl SchoolStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A fresh store holding the baseline dataset.
    pub fn seeded() -> Self {
        let mut store = Self::new();
        store.seed();
        store
    }

    /// Drop all data and restart id counters.
    pub fn reset(&mut self) {
        self.students.clear();
        self.courses.clear();
        self.enrollments.clear();
        tracing::debug!("store reset");
    }

    /// Append the baseline dataset.
    pub fn seed(&mut self) {
        for (name, email) in seed::STUDENTS {
            self.push_seed::<Student>(school_students::NewStudent::new(*name, *email));
        }
        for (title, teacher) in seed::COURSES {
            self.push_seed::<Course>(school_courses::NewCourse::new(*title, *teacher));
        }
        tracing::debug!(
            students = self.students.len(),
            courses = self.courses.len(),
            "store seeded"
        );
    }

    fn push_seed<R: Record>(&mut self, draft: R::Draft) {
        // Seeding on top of colliding data keeps the existing record.
        if let Err(e) = self.create::<R>(draft) {
            tracing::warn!(kind = R::KIND, error = %e, "seed record skipped");
        }
    }

    /// Every record of a collection, in insertion order.
    pub fn all<R: Record>(&self) -> Vec<R> {
        R::collection(self).iter().cloned().collect()
    }

    /// Filtered, paginated listing. `total` counts all filter matches.
    pub fn list<R: Record>(&self, filter: &R::Filter, pagination: Pagination) -> Page<R> {
        let matching: Vec<R> = R::collection(self)
            .iter()
            .filter(|r| r.matches(filter))
            .cloned()
            .collect();
        pagination.apply(matching)
    }

    pub fn get<R: Record>(&self, id: R::Id) -> DomainResult<R> {
        R::collection(self)
            .get(id)
            .cloned()
            .ok_or_else(|| DomainError::not_found(R::NOT_FOUND))
    }

    pub fn create<R: Record>(&mut self, draft: R::Draft) -> DomainResult<R> {
        let collection = R::collection_mut(self);
        let record = R::build(collection.peek_id(), draft)?;

        if collection.any_other(None, |r| r.unique_key() == record.unique_key()) {
            return Err(DomainError::conflict(R::NOT_UNIQUE));
        }

        collection.push(record.clone());
        Ok(record)
    }

    /// Partial update: only fields present in the patch change.
    pub fn update<R: Record>(&mut self, id: R::Id, patch: R::Patch) -> DomainResult<R> {
        let collection = R::collection_mut(self);
        if !collection.contains(id) {
            return Err(DomainError::not_found(R::NOT_FOUND));
        }
        R::validate_patch(&patch)?;

        if let Some(key) = R::patch_key(&patch) {
            if collection.any_other(Some(id), |r| r.unique_key() == key) {
                return Err(DomainError::conflict(R::NOT_UNIQUE));
            }
        }

        let record = collection
            .get_mut(id)
            .ok_or_else(|| DomainError::not_found(R::NOT_FOUND))?;
        record.apply_patch(patch);
        Ok(record.clone())
    }

    /// Remove a record no enrollment refers to.
    pub fn remove<R: Record>(&mut self, id: R::Id) -> DomainResult<()> {
        if !R::collection(self).contains(id) {
            return Err(DomainError::not_found(R::NOT_FOUND));
        }
        if R::is_enrolled(&self.enrollments, id) {
            return Err(DomainError::business_rule(R::IN_USE));
        }
        R::collection_mut(self).remove(id);
        Ok(())
    }

    /// Enroll a student in a course.
    ///
    /// Checks run in order: course exists, student exists, pair is new,
    /// course has a free seat.
    pub fn enroll(&mut self, student_id: StudentId, course_id: CourseId) -> DomainResult<()> {
        let course = self
            .courses
            .get(course_id)
            .ok_or_else(|| DomainError::not_found(<Course as Record>::NOT_FOUND))?;
        if !self.students.contains(student_id) {
            return Err(DomainError::not_found(<Student as Record>::NOT_FOUND));
        }
        if self.enrollments.contains(student_id, course_id) {
            return Err(DomainError::business_rule(messages::ALREADY_ENROLLED));
        }
        if course.is_full(self.enrollments.count_for_course(course_id)) {
            return Err(DomainError::business_rule(messages::COURSE_FULL));
        }

        self.enrollments.insert(student_id, course_id);
        Ok(())
    }

    pub fn unenroll(&mut self, student_id: StudentId, course_id: CourseId) -> DomainResult<()> {
        if self.enrollments.remove(student_id, course_id) {
            Ok(())
        } else {
            Err(DomainError::not_found(messages::ENROLLMENT_NOT_FOUND))
        }
    }

    /// Courses a student is enrolled in, in enrollment order.
    pub fn courses_of(&self, student_id: StudentId) -> DomainResult<Vec<Course>> {
        if !self.students.contains(student_id) {
            return Err(DomainError::not_found(<Student as Record>::NOT_FOUND));
        }
        Ok(self
            .enrollments
            .course_ids_of(student_id)
            .filter_map(|id| self.courses.get(id).cloned())
            .collect())
    }

    /// Students enrolled in a course, in enrollment order.
    pub fn students_of(&self, course_id: CourseId) -> DomainResult<Vec<Student>> {
        if !self.courses.contains(course_id) {
            return Err(DomainError::not_found(<Course as Record>::NOT_FOUND));
        }
        Ok(self
            .enrollments
            .student_ids_of(course_id)
            .filter_map(|id| self.students.get(id).cloned())
            .collect())
    }

    pub fn enrollments(&self) -> &EnrollmentBook {
        &self.enrollments
    }
}
