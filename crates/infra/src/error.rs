//! Service-level errors and the error payload handed to the caller layer.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use mosaic_conversion::RequiredFieldViolation;
use mosaic_core::DomainError;

use crate::store::StoreError;

/// Failure reported by a remote collaborator (ordering or organizations system).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClientError {
    #[error("remote resource not found: {0}")]
    NotFound(String),

    #[error("remote validation failed: {0}")]
    Unprocessable(String),

    #[error("remote rejected request: {0}")]
    BadRequest(String),

    #[error("remote server error: {0}")]
    Server(String),
}

/// Error surfaced by the mosaic services.
///
/// The merge engine never recovers; every failure propagates here unchanged and the
/// caller maps it to a response via [`ServiceError::code`].
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("{0} already exists")]
    AlreadyExists(&'static str),

    #[error(transparent)]
    Validation(#[from] RequiredFieldViolation),

    #[error(transparent)]
    Remote(#[from] ClientError),

    #[error("failed to create default order template: {0}")]
    TemplateInitialization(String),

    #[error("invalid configuration: {0}")]
    Configuration(String),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Machine-readable error codes of the caller-facing error payload.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ErrorCode {
    ValidationError,
    NotFoundError,
    InternalError,
    BadRequestError,
    UnknownError,
    AlreadyExistsError,
}

impl ErrorCode {
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::ValidationError => "Validation error",
            ErrorCode::NotFoundError => "Resource not found",
            ErrorCode::InternalError => "Internal error occurred",
            ErrorCode::BadRequestError => "Bad request sent by the client",
            ErrorCode::UnknownError => "Unknown error occurred",
            ErrorCode::AlreadyExistsError => "Resource already exists",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Error {
    pub code: ErrorCode,
    pub message: String,
}

/// Error collection returned to API callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Errors {
    pub errors: Vec<Error>,
    pub total_records: usize,
}

impl Errors {
    pub fn single(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::from_errors(vec![Error {
            code,
            message: message.into(),
        }])
    }

    pub fn from_errors(errors: Vec<Error>) -> Self {
        let total_records = errors.len();
        Self {
            errors,
            total_records,
        }
    }
}

impl ServiceError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ServiceError::NotFound(_) => ErrorCode::NotFoundError,
            ServiceError::AlreadyExists(_) => ErrorCode::AlreadyExistsError,
            ServiceError::Validation(_) => ErrorCode::ValidationError,
            ServiceError::Remote(ClientError::NotFound(_)) => ErrorCode::NotFoundError,
            ServiceError::Remote(ClientError::Unprocessable(_)) => ErrorCode::ValidationError,
            ServiceError::Remote(ClientError::BadRequest(_)) => ErrorCode::BadRequestError,
            ServiceError::Remote(ClientError::Server(_)) => ErrorCode::InternalError,
            ServiceError::TemplateInitialization(_)
            | ServiceError::Configuration(_)
            | ServiceError::Store(_) => {
                ErrorCode::InternalError
            }
            ServiceError::Domain(DomainError::NotFound) => ErrorCode::NotFoundError,
            ServiceError::Domain(DomainError::Conflict(_)) => ErrorCode::AlreadyExistsError,
            ServiceError::Domain(DomainError::Validation(_)) => ErrorCode::ValidationError,
            ServiceError::Domain(
                DomainError::InvalidId(_) | DomainError::InvalidValue { .. },
            ) => ErrorCode::BadRequestError,
            ServiceError::Domain(DomainError::InvariantViolation(_)) => ErrorCode::UnknownError,
        }
    }

    /// Single-entry error payload for this error.
    pub fn to_errors(&self) -> Errors {
        Errors::single(self.code(), self.to_string())
    }
}
