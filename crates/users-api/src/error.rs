use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use users_core::error::DomainError;

use crate::response::ErrorResponse;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid user ID. Must be a positive integer.")]
    InvalidUserId,

    #[error("Invalid JSON body")]
    MalformedBody(String),

    #[error("Validation failed")]
    ValidationFailed(Vec<String>),

    #[error("User not found")]
    NotFound { changes: Option<u64> },

    #[error("A user with this email already exists.")]
    DuplicateEmail,

    /// Detail is logged, never sent to the client.
    #[error("Internal server error")]
    Internal(String),
}

impl ApiError {
    /// Like `From<DomainError>`, but a missing row also reports `changes: 0`.
    pub fn from_mutation(err: DomainError) -> Self {
        match err {
            DomainError::UserNotFound(_) => ApiError::NotFound { changes: Some(0) },
            other => other.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidUserId
            | ApiError::MalformedBody(_)
            | ApiError::ValidationFailed(_)
            | ApiError::DuplicateEmail => StatusCode::BAD_REQUEST,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidUserId(_) => ApiError::InvalidUserId,
            DomainError::ValidationFailed(errors) => ApiError::ValidationFailed(errors.messages()),
            DomainError::UserNotFound(_) => ApiError::NotFound { changes: None },
            DomainError::EmailAlreadyExists(_) => ApiError::DuplicateEmail,
            DomainError::DatabaseError(msg) => ApiError::Internal(msg),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let mut body = ErrorResponse::new(&self.to_string());

        match self {
            ApiError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
            }
            ApiError::MalformedBody(msg) => {
                tracing::warn!("Malformed body: {}", msg);
            }
            ApiError::ValidationFailed(details) => {
                body.details = Some(details);
            }
            ApiError::NotFound { changes } => {
                body.changes = changes;
            }
            ApiError::InvalidUserId | ApiError::DuplicateEmail => {
                tracing::warn!("{}", body.error);
            }
        }

        (status, Json(body)).into_response()
    }
}
