//! Domain error types
//!
//! These errors are framework-agnostic and represent business-level failures.

use std::fmt;

#[derive(Debug)]
pub enum DomainError {
    /// Operation targeted an id that does not exist
    NotFound,
    /// One message per violated rule, every applicable rule evaluated
    Validation(Vec<String>),
    /// Operation blocked by a business rule (e.g. delete with employees)
    Conflict(String),
    /// Database/persistence error
    Database(String),
}

impl DomainError {
    /// Prepend operation context to a storage failure.
    ///
    /// Validation/not-found/conflict outcomes pass through untouched so the
    /// caller can still match on the kind.
    pub fn in_context(self, context: &str) -> DomainError {
        match self {
            DomainError::Database(msg) => DomainError::Database(format!("{}: {}", context, msg)),
            other => other,
        }
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::NotFound => write!(f, "Resource not found"),
            DomainError::Validation(errors) => {
                write!(f, "Validation failed: {}", errors.join(", "))
            }
            DomainError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            DomainError::Database(msg) => write!(f, "Database error: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}

// Conversion from SeaORM errors (used in infrastructure layer)
impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        DomainError::Database(e.to_string())
    }
}
