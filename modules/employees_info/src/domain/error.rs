use thiserror::Error;

/// A single field-level validation failure, in request-field terms
/// (`firstName`, `idSex`, ...) so it can be surfaced verbatim to clients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Domain-specific errors using thiserror
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Employee not found: {id}")]
    EmployeeNotFound { id: String },

    #[error("Sex not found: {id}")]
    SexNotFound { id: String },

    #[error("Job position not found: {id}")]
    JobPositionNotFound { id: String },

    #[error("Invalid birth date '{value}', expected dd/MM/yyyy")]
    InvalidBirthDate { value: String },

    #[error("Request validation failed ({} violation(s))", .0.len())]
    Validation(Vec<FieldViolation>),

    #[error("Database error: {message}")]
    Database { message: String },
}

impl DomainError {
    pub fn employee_not_found(id: impl Into<String>) -> Self {
        Self::EmployeeNotFound { id: id.into() }
    }

    pub fn sex_not_found(id: impl Into<String>) -> Self {
        Self::SexNotFound { id: id.into() }
    }

    pub fn job_position_not_found(id: impl Into<String>) -> Self {
        Self::JobPositionNotFound { id: id.into() }
    }

    pub fn invalid_birth_date(value: impl Into<String>) -> Self {
        Self::InvalidBirthDate {
            value: value.into(),
        }
    }

    pub fn database(message: impl Into<String>) -> Self {
        Self::Database {
            message: message.into(),
        }
    }
}
