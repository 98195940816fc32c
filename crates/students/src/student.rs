use serde::{Deserialize, Serialize};

use school_core::text::{contains_ignore_case, non_blank};
use school_core::{DomainError, DomainResult, Entity, StudentId};

/// Error message for a missing or blank name/email.
pub const REQUIRED_FIELDS: &str = "name and email required";

/// A registered student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Student {
    id: StudentId,
    name: String,
    email: String,
}

/// Fields supplied when registering a student.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NewStudent {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl NewStudent {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
        }
    }
}

/// Partial update: `None` keeps the existing value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct StudentPatch {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Listing filter (case-insensitive substring on each supplied field).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct StudentFilter {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl Student {
    /// Build a student from a registration draft.
    ///
    /// Both name and email must be present and non-blank.
    pub fn register(id: StudentId, draft: NewStudent) -> DomainResult<Self> {
        match (non_blank(draft.name.as_deref()), non_blank(draft.email.as_deref())) {
            (Some(name), Some(email)) => Ok(Self {
                id,
                name: name.to_string(),
                email: email.to_string(),
            }),
            _ => Err(DomainError::validation(REQUIRED_FIELDS)),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Supplied fields may not be blank.
    pub fn validate_patch(patch: &StudentPatch) -> DomainResult<()> {
        let blank = |v: &Option<String>| v.as_deref().is_some_and(|s| s.trim().is_empty());
        if blank(&patch.name) || blank(&patch.email) {
            return Err(DomainError::validation(REQUIRED_FIELDS));
        }
        Ok(())
    }

    /// Apply a validated patch.
    pub fn apply(&mut self, patch: StudentPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
    }

    pub fn matches(&self, filter: &StudentFilter) -> bool {
        filter
            .name
            .as_deref()
            .is_none_or(|n| contains_ignore_case(&self.name, n))
            && filter
                .email
                .as_deref()
                .is_none_or(|e| contains_ignore_case(&self.email, e))
    }
}

impl Entity for Student {
    type Id = StudentId;

    fn id(&self) -> Self::Id {
        self.id
    }
}
