//! # Users Core
//! 
//! Domain entities, the sanitize/validate pipeline, the repository port and
//! the user service that orchestrates them.

pub mod domain;
pub mod services;
pub mod repositories;
pub mod error;

// Re-export domain entities
pub use domain::*;
pub use error::DomainError;
