//! Domain-level error types.

use thiserror::Error;

/// Classified reason an operation could not complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cause {
    NoEmptyFieldsAllowed,
    NullItemReceived,
    IdDoesNotExist,
    StorageFailure,
}

impl Cause {
    /// Generic, client-facing label of this kind of failure.
    pub fn label(self) -> &'static str {
        match self {
            Cause::NoEmptyFieldsAllowed => "No empty fields allowed",
            Cause::NullItemReceived => "The blog body is null/empty",
            Cause::IdDoesNotExist => "id not found",
            Cause::StorageFailure => "Storage failure",
        }
    }
}

impl std::fmt::Display for Cause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Domain errors - business logic failures.
#[derive(Debug, Error)]
pub enum DomainError {
    /// One or more required fields were blank. Field names are listed in
    /// validation order.
    #[error("No empty fields allowed")]
    EmptyFields(Vec<&'static str>),

    #[error("id not found")]
    NotFound { entity_type: &'static str, id: String },

    /// Response assembly was handed no entity.
    #[error("The blog body is null/empty")]
    NullItem,

    #[error("Storage failure: {0}")]
    Repository(#[from] RepoError),
}

impl DomainError {
    pub fn cause(&self) -> Cause {
        match self {
            DomainError::EmptyFields(_) => Cause::NoEmptyFieldsAllowed,
            DomainError::NotFound { .. } => Cause::IdDoesNotExist,
            DomainError::NullItem => Cause::NullItemReceived,
            DomainError::Repository(_) => Cause::StorageFailure,
        }
    }

    /// Occurrence-specific detail, safe to show to a client.
    pub fn detail(&self) -> Option<String> {
        match self {
            DomainError::EmptyFields(fields) => Some(format!(
                "The following fields are empty: [{}]",
                fields.join(", ")
            )),
            DomainError::NotFound { .. } => {
                Some("The submitted id is not in the system".to_string())
            }
            DomainError::NullItem | DomainError::Repository(_) => None,
        }
    }
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Entity not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    Constraint(String),
}
