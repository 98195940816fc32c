use serde::{Deserialize, Serialize};

use school_core::text::{contains_ignore_case, non_blank};
use school_core::{CourseId, DomainError, DomainResult, Entity};

/// Error message for a missing or blank title/teacher.
pub const REQUIRED_FIELDS: &str = "title and teacher required";

/// A course students can enroll in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Course {
    id: CourseId,
    title: String,
    teacher: String,
}

/// Fields supplied when creating a course.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NewCourse {
    pub title: Option<String>,
    pub teacher: Option<String>,
}

impl NewCourse {
    pub fn new(title: impl Into<String>, teacher: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            teacher: Some(teacher.into()),
        }
    }
}

/// Partial update: `None` keeps the existing value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CoursePatch {
    pub title: Option<String>,
    pub teacher: Option<String>,
}

/// Listing filter (case-insensitive substring on each supplied field).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CourseFilter {
    pub title: Option<String>,
    pub teacher: Option<String>,
}

impl Course {
    /// Maximum number of students enrolled at the same time.
    pub const CAPACITY: usize = 4;

    /// Build a course from a creation draft.
    pub fn create(id: CourseId, draft: NewCourse) -> DomainResult<Self> {
        match (
            non_blank(draft.title.as_deref()),
            non_blank(draft.teacher.as_deref()),
        ) {
            (Some(title), Some(teacher)) => Ok(Self {
                id,
                title: title.to_string(),
                teacher: teacher.to_string(),
            }),
            _ => Err(DomainError::validation(REQUIRED_FIELDS)),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn teacher(&self) -> &str {
        &self.teacher
    }

    pub fn capacity(&self) -> usize {
        Self::CAPACITY
    }

    /// Whether `enrolled` students leave no free seat.
    pub fn is_full(&self, enrolled: usize) -> bool {
        enrolled >= Self::CAPACITY
    }

    pub fn validate_patch(patch: &CoursePatch) -> DomainResult<()> {
        let blank = |v: &Option<String>| v.as_deref().is_some_and(|s| s.trim().is_empty());
        if blank(&patch.title) || blank(&patch.teacher) {
            return Err(DomainError::validation(REQUIRED_FIELDS));
        }
        Ok(())
    }

    pub fn apply(&mut self, patch: CoursePatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(teacher) = patch.teacher {
            self.teacher = teacher;
        }
    }

    pub fn matches(&self, filter: &CourseFilter) -> bool {
        filter
            .title
            .as_deref()
            .is_none_or(|t| contains_ignore_case(&self.title, t))
            && filter
                .teacher
                .as_deref()
                .is_none_or(|t| contains_ignore_case(&self.teacher, t))
    }
}

impl Entity for Course {
    type Id = CourseId;

    fn id(&self) -> Self::Id {
        self.id
    }
}
