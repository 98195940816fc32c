//! Student/course enrollment links.

use school_core::{CourseId, StudentId};

/// A student taking a course. The pair is its own key.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Enrollment {
    pub student_id: StudentId,
    pub course_id: CourseId,
}

/// Enrollment links in insertion order.
///
/// Holds no rules of its own beyond pair uniqueness; existence and capacity
/// checks are made by the store before calling [`EnrollmentBook::insert`].
#[derive(Debug, Clone, Default)]
pub struct EnrollmentBook {
    links: Vec<Enrollment>,
}

impl EnrollmentBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, student_id: StudentId, course_id: CourseId) -> bool {
        self.links
            .iter()
            .any(|e| e.student_id == student_id && e.course_id == course_id)
    }

    /// Returns `false` if the pair was already present.
    pub fn insert(&mut self, student_id: StudentId, course_id: CourseId) -> bool {
        if self.contains(student_id, course_id) {
            return false;
        }
        self.links.push(Enrollment {
            student_id,
            course_id,
        });
        true
    }

    /// Returns `false` if the pair was not present.
    pub fn remove(&mut self, student_id: StudentId, course_id: CourseId) -> bool {
        let before = self.links.len();
        self.links
            .retain(|e| !(e.student_id == student_id && e.course_id == course_id));
        self.links.len() != before
    }

    pub fn course_ids_of(&self, student_id: StudentId) -> impl Iterator<Item = CourseId> + '_ {
        self.links
            .iter()
            .filter(move |e| e.student_id == student_id)
            .map(|e| e.course_id)
    }

    pub fn student_ids_of(&self, course_id: CourseId) -> impl Iterator<Item = StudentId> + '_ {
        self.links
            .iter()
            .filter(move |e| e.course_id == course_id)
            .map(|e| e.student_id)
    }

    pub fn count_for_course(&self, course_id: CourseId) -> usize {
        self.student_ids_of(course_id).count()
    }

    pub fn references_student(&self, student_id: StudentId) -> bool {
        self.course_ids_of(student_id).next().is_some()
    }

    pub fn references_course(&self, course_id: CourseId) -> bool {
        self.student_ids_of(course_id).next().is_some()
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Enrollment> {
        self.links.iter()
    }

    pub fn clear(&mut self) {
        self.links.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(id: u64) -> StudentId {
        StudentId::new(id)
    }

    fn c(id: u64) -> CourseId {
        CourseId::new(id)
    }

    #[test]
    fn pairs_are_unique() {
        let mut book = EnrollmentBook::new();
        assert!(book.insert(s(1), c(1)));
        assert!(!book.insert(s(1), c(1)));
        assert!(book.insert(s(1), c(2)));
        assert_eq!(book.len(), 2);
    }

    #[test]
    fn lookups_follow_insertion_order() {
        let mut book = EnrollmentBook::new();
        book.insert(s(2), c(1));
        book.insert(s(1), c(1));
        book.insert(s(1), c(3));

        assert_eq!(book.student_ids_of(c(1)).collect::<Vec<_>>(), vec![s(2), s(1)]);
        assert_eq!(book.course_ids_of(s(1)).collect::<Vec<_>>(), vec![c(1), c(3)]);
        assert_eq!(book.count_for_course(c(1)), 2);
    }

    #[test]
    fn remove_reports_missing_pairs() {
        let mut book = EnrollmentBook::new();
        book.insert(s(1), c(1));
        assert!(!book.remove(s(1), c(2)));
        assert!(book.remove(s(1), c(1)));
        assert!(!book.references_student(s(1)));
        assert!(!book.references_course(c(1)));
        assert!(book.is_empty());
    }
}
