// ============================================================================
// Users Core - User Service
// File: crates/users-core/src/services/user_service.rs
// ============================================================================
//! CRUD flows: id gate, sanitize, validate, then a single store call

use std::sync::Arc;
use tracing::{info, warn};

use users_shared::utils::mask_email;
use users_shared::EntityId;

use crate::domain::{parse_user_id, RawUserInput, User, UserRecord};
use crate::error::DomainError;
use crate::repositories::UserRepository;

/// User service. Holds the store handle it was constructed with; there is no
/// process-wide connection.
pub struct UserService<R: UserRepository + ?Sized> {
    user_repo: Arc<R>,
}

impl<R: UserRepository + ?Sized> UserService<R> {
    pub fn new(user_repo: Arc<R>) -> Self {
        Self { user_repo }
    }

    /// All users, newest first
    pub async fn list_users(&self) -> Result<Vec<User>, DomainError> {
        self.user_repo.list().await
    }

    pub async fn get_user(&self, raw_id: &str) -> Result<User, DomainError> {
        let id = parse_user_id(raw_id)?;
        self.user_repo
            .find_by_id(id)
            .await?
            .ok_or(DomainError::UserNotFound(id))
    }

    /// Create a user and return the id the store assigned
    pub async fn create_user(&self, input: &RawUserInput) -> Result<EntityId, DomainError> {
        let record = Self::validated(input)?;

        let id = self.user_repo.create(&record).await?;

        info!("User {} created with email: {}", id, mask_email(&record.email));
        Ok(id)
    }

    /// Replace every editable field of an existing user. Returns the number
    /// of changed rows, which is always 1 on success.
    ///
    /// Takes an id that already passed `parse_user_id`, so callers can gate
    /// the path before reading the body.
    pub async fn update_user(&self, id: EntityId, input: &RawUserInput) -> Result<u64, DomainError> {
        let record = Self::validated(input)?;

        let changes = self.user_repo.update(id, &record).await?;
        if changes == 0 {
            warn!("Update failed: user {} not found", id);
            return Err(DomainError::UserNotFound(id));
        }

        info!("User {} updated", id);
        Ok(changes)
    }

    pub async fn delete_user(&self, raw_id: &str) -> Result<u64, DomainError> {
        let id = parse_user_id(raw_id)?;

        let changes = self.user_repo.delete(id).await?;
        if changes == 0 {
            warn!("Delete failed: user {} not found", id);
            return Err(DomainError::UserNotFound(id));
        }

        info!("User {} deleted", id);
        Ok(changes)
    }

    /// Store reachability, for readiness probes
    pub async fn ping(&self) -> Result<(), DomainError> {
        self.user_repo.ping().await
    }

    fn validated(input: &RawUserInput) -> Result<UserRecord, DomainError> {
        input.sanitize().validate().map_err(|errors| {
            warn!("Validation failed: {}", errors);
            DomainError::ValidationFailed(errors)
        })
    }
}
