//! Standardized API response types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Message carried by every successful envelope.
pub const SUCCESS_MESSAGE: &str = "success";

/// Standard successful API response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// HTTP status code the payload is returned with.
    pub status: u16,
    pub message: String,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(status: u16, data: T) -> Self {
        Self {
            status,
            message: SUCCESS_MESSAGE.to_string(),
            data,
        }
    }

    /// 200 OK envelope.
    pub fn ok(data: T) -> Self {
        Self::new(200, data)
    }

    /// 201 Created envelope.
    pub fn created(data: T) -> Self {
        Self::new(201, data)
    }
}

/// Error body returned for every domain failure.
///
/// `error` carries the generic label of the failure kind, `cause` the
/// specific detail of this occurrence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub timestamp: DateTime<Utc>,

    /// The HTTP status code.
    pub status: u16,

    pub error: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cause: Option<String>,

    /// Path of the request that failed.
    pub path: String,
}

impl ErrorResponse {
    pub fn new(status: u16, error: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            status,
            error: error.into(),
            cause: None,
            path: path.into(),
        }
    }

    pub fn with_cause(mut self, cause: impl Into<String>) -> Self {
        self.cause = Some(cause.into());
        self
    }

    // Common error constructors
    pub fn bad_request(error: impl Into<String>, path: impl Into<String>) -> Self {
        Self::new(400, error, path)
    }

    pub fn not_found(error: impl Into<String>, path: impl Into<String>) -> Self {
        Self::new(404, error, path)
    }

    pub fn internal_error(error: impl Into<String>, path: impl Into<String>) -> Self {
        Self::new(500, error, path)
    }
}
