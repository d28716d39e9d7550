//! # Users Core - Domain Module
//! 
//! The `User` entity and the pipeline that turns raw request input into a
//! record the store accepts.

pub mod user;
pub mod sanitizer;
pub mod validation;

pub use user::{User, UserRecord};
pub use sanitizer::{RawUserInput, SanitizedUser};
pub use validation::{parse_user_id, Field, Rule, ValidationErrors, Violation};
