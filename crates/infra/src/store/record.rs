//! Record trait: what the store needs to know about each collection type.

use school_core::{DomainResult, Entity};
use school_courses::{Course, CourseFilter, CoursePatch, NewCourse};
use school_students::{NewStudent, Student, StudentFilter, StudentPatch};

use crate::store::{Collection, EnrollmentBook, SchoolStore};

/// A storable entity type with a unique key and enrollment references.
///
/// The store's generic CRUD operations are written once against this trait;
/// the per-type messages are what API callers see.
pub trait Record: Entity<Id: From<u64>> + Clone {
    /// Fields supplied on creation.
    type Draft;
    /// Fields supplied on partial update.
    type Patch;
    /// Listing filter.
    type Filter: Default;

    /// Human-readable collection name, used in logs.
    const KIND: &'static str;
    const NOT_FOUND: &'static str;
    const NOT_UNIQUE: &'static str;
    /// Reported when removal is blocked by an enrollment.
    const IN_USE: &'static str;

    fn build(id: Self::Id, draft: Self::Draft) -> DomainResult<Self>;
    fn unique_key(&self) -> &str;
    fn validate_patch(patch: &Self::Patch) -> DomainResult<()>;
    /// New unique key carried by the patch, if any.
    fn patch_key(patch: &Self::Patch) -> Option<&str>;
    fn apply_patch(&mut self, patch: Self::Patch);
    fn matches(&self, filter: &Self::Filter) -> bool;
    fn is_enrolled(book: &EnrollmentBook, id: Self::Id) -> bool;

    fn collection(store: &SchoolStore) -> &Collection<Self>;
    fn collection_mut(store: &mut SchoolStore) -> &mut Collection<Self>;
}

impl Record for Student {
    type Draft = NewStudent;
    type Patch = StudentPatch;
    type Filter = StudentFilter;

    const KIND: &'static str = "student";
    const NOT_FOUND: &'static str = "Student not found";
    const NOT_UNIQUE: &'static str = "Email must be unique";
    const IN_USE: &'static str = "Cannot delete student: enrolled in a course";

    fn build(id: Self::Id, draft: Self::Draft) -> DomainResult<Self> {
        Student::register(id, draft)
    }

    fn unique_key(&self) -> &str {
        self.email()
    }

    fn validate_patch(patch: &Self::Patch) -> DomainResult<()> {
        Student::validate_patch(patch)
    }

    fn patch_key(patch: &Self::Patch) -> Option<&str> {
        patch.email.as_deref()
    }

    fn apply_patch(&mut self, patch: Self::Patch) {
        self.apply(patch)
    }

    fn matches(&self, filter: &Self::Filter) -> bool {
        Student::matches(self, filter)
    }

    fn is_enrolled(book: &EnrollmentBook, id: Self::Id) -> bool {
        book.references_student(id)
    }

    fn collection(store: &SchoolStore) -> &Collection<Self> {
        &store.students
    }

    fn collection_mut(store: &mut SchoolStore) -> &mut Collection<Self> {
        &mut store.students
    }
}

impl Record for Course {
    type Draft = NewCourse;
    type Patch = CoursePatch;
    type Filter = CourseFilter;

    const KIND: &'static str = "course";
    const NOT_FOUND: &'static str = "Course not found";
    const NOT_UNIQUE: &'static str = "Course title must be unique";
    const IN_USE: &'static str = "Cannot delete course: students are enrolled";

    fn build(id: Self::Id, draft: Self::Draft) -> DomainResult<Self> {
        Course::create(id, draft)
    }

    fn unique_key(&self) -> &str {
        self.title()
    }

    fn validate_patch(patch: &Self::Patch) -> DomainResult<()> {
        Course::validate_patch(patch)
    }

    fn patch_key(patch: &Self::Patch) -> Option<&str> {
        patch.title.as_deref()
    }

    fn apply_patch(&mut self, patch: Self::Patch) {
        self.apply(patch)
    }

    fn matches(&self, filter: &Self::Filter) -> bool {
        Course::matches(self, filter)
    }

    fn is_enrolled(book: &EnrollmentBook, id: Self::Id) -> bool {
        book.references_course(id)
    }

    fn collection(store: &SchoolStore) -> &Collection<Self> {
        &store.courses
    }

    fn collection_mut(store: &mut SchoolStore) -> &mut Collection<Self> {
        &mut store.courses
    }
}
