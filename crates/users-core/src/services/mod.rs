//! Domain services (business logic)

pub mod user_service;

pub use user_service::UserService;
