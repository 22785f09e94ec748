use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// Standard error response body returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Technical detail of the error, for debugging.
    pub detalle: String,
    /// Human-readable message intended for the client.
    pub mensaje: String,
    /// Field associated with the error; empty when not field-related.
    pub campo: String,
    /// When the error occurred, server local time.
    pub timestamp: NaiveDateTime,
}

/// Axum response wrapper that renders an [`ErrorResponse`] with its status.
#[derive(Debug, Clone)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: ErrorResponse,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

/// Helper to create an ApiError with less boilerplate.
pub fn from_parts(
    status: StatusCode,
    campo: &str,
    mensaje: &str,
    detalle: impl Into<String>,
) -> ApiError {
    ApiError {
        status,
        body: ErrorResponse {
            detalle: detalle.into(),
            mensaje: mensaje.to_string(),
            campo: campo.to_string(),
            timestamp: chrono::Local::now().naive_local(),
        },
    }
}

/// Map a domain error to its HTTP representation. The single place where
/// error kinds turn into status codes and response bodies.
pub fn map_domain_error(e: &DomainError) -> ApiError {
    match e {
        DomainError::EmployeeNotFound { .. } => from_parts(
            StatusCode::NOT_FOUND,
            "idEmployee",
            "Employee not found",
            e.to_string(),
        ),
        DomainError::SexNotFound { .. } => from_parts(
            StatusCode::NOT_FOUND,
            "idSex",
            "Sex not found",
            e.to_string(),
        ),
        DomainError::JobPositionNotFound { .. } => from_parts(
            StatusCode::NOT_FOUND,
            "idJobPosition",
            "Job Position not found",
            e.to_string(),
        ),
        DomainError::InvalidBirthDate { .. } => from_parts(
            StatusCode::BAD_REQUEST,
            "birthDay",
            "Invalid birth date",
            e.to_string(),
        ),
        DomainError::Validation(violations) => {
            let campo = violations
                .first()
                .map(|v| v.field.clone())
                .unwrap_or_default();
            let detalle = violations
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; ");
            from_parts(
                StatusCode::BAD_REQUEST,
                &campo,
                "Request validation failed",
                detalle,
            )
        }
        DomainError::Database { .. } => {
            // Log the internal error details but don't expose more than the
            // detail string to the client; never a stack trace.
            tracing::error!(error = ?e, "Database error occurred");
            from_parts(
                StatusCode::INTERNAL_SERVER_ERROR,
                "",
                "Internal server error",
                e.to_string(),
            )
        }
    }
}
