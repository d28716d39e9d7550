//! Domain errors

use thiserror::Error;
use users_shared::EntityId;

use crate::domain::ValidationErrors;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid user id: {0:?}")]
    InvalidUserId(String),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationErrors),

    #[error("User not found: {0}")]
    UserNotFound(EntityId),

    #[error("Email already exists: {0}")]
    EmailAlreadyExists(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
