//! # Users Infrastructure
//! 
//! SQLite adapters for the user directory.

pub mod database;

pub use database::{create_memory_pool, create_pool, run_migrations, SqliteUserRepository};
