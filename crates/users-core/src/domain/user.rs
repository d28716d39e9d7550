// ============================================================================
// Users Core - User Entity
// File: crates/users-core/src/domain/user.rs
// Description: Stored user row and the validated editable field set
// ============================================================================

use serde::{Deserialize, Serialize};
use users_shared::EntityId;

/// A stored user. `id` is assigned by the store and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: EntityId,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub zipcode: Option<String>,
    pub geo_lat: Option<String>,
    pub geo_lng: Option<String>,
}

/// Editable fields of a user after validation. Only values of this type
/// reach the store; creates and updates replace every field at once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub zipcode: Option<String>,
    pub geo_lat: Option<String>,
    pub geo_lng: Option<String>,
}

impl User {
    pub fn from_record(id: EntityId, record: UserRecord) -> Self {
        Self {
            id,
            name: record.name,
            email: record.email,
            phone: record.phone,
            street: record.street,
            city: record.city,
            zipcode: record.zipcode,
            geo_lat: record.geo_lat,
            geo_lng: record.geo_lng,
        }
    }

    /// Editable fields of this user, without the id.
    pub fn record(&self) -> UserRecord {
        UserRecord {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            street: self.street.clone(),
            city: self.city.clone(),
            zipcode: self.zipcode.clone(),
            geo_lat: self.geo_lat.clone(),
            geo_lng: self.geo_lng.clone(),
        }
    }
}
