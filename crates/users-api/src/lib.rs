//! # Users API
//! 
//! HTTP handlers, response bodies, error mapping and router for the user
//! directory.

pub mod handlers;
pub mod error;
pub mod response;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::build_router;
pub use state::AppState;
