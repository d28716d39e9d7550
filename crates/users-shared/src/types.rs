//! Common types

/// Store-assigned primary key of a user row.
pub type EntityId = i64;
