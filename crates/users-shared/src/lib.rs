//! # Users Shared
//! 
//! Configuration, telemetry, constants and small helpers shared by every
//! layer of the user directory service.

pub mod constants;
pub mod types;
pub mod utils;
pub mod telemetry;
pub mod config;
pub mod error;

pub use types::*;
pub use error::AppError;
