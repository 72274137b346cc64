//! Error mapping - turns domain failures into status-coded JSON bodies.

use actix_web::{HttpRequest, HttpResponse, ResponseError, error, http::StatusCode};
use blog_core::DomainError;
use blog_shared::ErrorResponse;

/// A domain failure bound to the request path it happened on.
#[derive(Debug, thiserror::Error)]
#[error("{error}")]
pub struct ApiError {
    pub error: DomainError,
    pub path: String,
}

impl ApiError {
    pub fn new(error: DomainError, path: impl Into<String>) -> Self {
        Self {
            error,
            path: path.into(),
        }
    }

    /// Build the response body for this failure.
    pub fn to_body(&self) -> ErrorResponse {
        let label = self.error.cause().label();
        let path = self.path.clone();

        let body = match &self.error {
            DomainError::EmptyFields(_) => ErrorResponse::bad_request(label, path),
            DomainError::NotFound { .. } => ErrorResponse::not_found(label, path),
            DomainError::NullItem | DomainError::Repository(_) => {
                ErrorResponse::internal_error(label, path)
            }
        };

        match self.error.detail() {
            Some(detail) => body.with_cause(detail),
            None => body,
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match &self.error {
            DomainError::EmptyFields(_) => StatusCode::BAD_REQUEST,
            DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
            DomainError::NullItem | DomainError::Repository(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        match &self.error {
            DomainError::NullItem | DomainError::Repository(_) => {
                // Log internal errors
                tracing::error!(path = %self.path, "Internal error: {}", self.error);
            }
            DomainError::NotFound { entity_type, id } => {
                tracing::debug!(path = %self.path, "{} with id {} not found", entity_type, id);
            }
            DomainError::EmptyFields(fields) => {
                tracing::debug!(path = %self.path, ?fields, "Validation failed");
            }
        }

        HttpResponse::build(self.status_code()).json(self.to_body())
    }
}

/// Attach the request path to a domain result.
pub trait WithPath<T> {
    fn with_path(self, req: &HttpRequest) -> Result<T, ApiError>;
}

impl<T> WithPath<T> for Result<T, DomainError> {
    fn with_path(self, req: &HttpRequest) -> Result<T, ApiError> {
        self.map_err(|e| ApiError::new(e, req.path()))
    }
}

/// Reject unparseable JSON bodies with the standard error body.
pub fn json_error_handler(err: error::JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    let body = ErrorResponse::bad_request("Malformed request body", req.path())
        .with_cause(err.to_string());
    error::InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
}

/// Result type alias for handlers.
pub type ApiResult<T> = Result<T, ApiError>;
