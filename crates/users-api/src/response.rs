//! API response bodies

use serde::Serialize;
use users_shared::EntityId;

/// `{ "data": ... }` wrapper for reads.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub message: String,
    pub id: EntityId,
}

/// Body for update and delete: a message plus the affected row count.
#[derive(Debug, Serialize)]
pub struct ChangesResponse {
    pub message: String,
    pub changes: u64,
}

impl ChangesResponse {
    pub fn new(message: &str, changes: u64) -> Self {
        Self {
            message: message.to_string(),
            changes,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub changes: Option<u64>,
}

impl ErrorResponse {
    pub fn new(error: &str) -> Self {
        Self {
            error: error.to_string(),
            details: None,
            changes: None,
        }
    }
}
