//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant carries the message shown to API callers, so the HTTP layer
/// only has to pick a status code.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Required fields were missing or empty.
    #[error("{0}")]
    Validation(String),

    /// A unique field (email, title) collides with another record.
    #[error("{0}")]
    Conflict(String),

    /// A requested entity or enrollment does not exist.
    #[error("{0}")]
    NotFound(String),

    /// A referential-integrity or enrollment rule blocked the operation.
    #[error("{0}")]
    BusinessRule(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn business_rule(msg: impl Into<String>) -> Self {
        Self::BusinessRule(msg.into())
    }

    /// Message intended for API callers.
    pub fn message(&self) -> String {
        self.to_string()
    }
}
