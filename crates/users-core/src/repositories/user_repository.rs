//! User repository trait (port)

use async_trait::async_trait;
use users_shared::EntityId;

use crate::domain::{User, UserRecord};
use crate::error::DomainError;

/// Storage for users. Each method is a single atomic statement.
///
/// Email uniqueness is enforced by the store itself: `create` and `update`
/// report a collision as [`DomainError::EmailAlreadyExists`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// All users, newest id first.
    async fn list(&self) -> Result<Vec<User>, DomainError>;
    async fn find_by_id(&self, id: EntityId) -> Result<Option<User>, DomainError>;
    /// Inserts the record and returns the id the store assigned.
    async fn create(&self, record: &UserRecord) -> Result<EntityId, DomainError>;
    /// Replaces every editable field. Returns the affected row count; 0 means no such id.
    async fn update(&self, id: EntityId, record: &UserRecord) -> Result<u64, DomainError>;
    /// Returns the affected row count; 0 means no such id.
    async fn delete(&self, id: EntityId) -> Result<u64, DomainError>;
    /// Cheap round trip used by readiness probes.
    async fn ping(&self) -> Result<(), DomainError>;
}
