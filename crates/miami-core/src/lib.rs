//! Miami admin tools core library
//!
//! This crate provides the foundational types, traits, and error handling
//! shared by the admin tools. It includes:
//!
//! - The seed user model (superadmin identity and role)
//! - The `SqlExecutor` capability used by everything that talks to a database
//! - Unified error handling
//! - Tool configuration

pub mod config;
pub mod error;
pub mod models;
pub mod traits;

pub use config::ToolConfig;
pub use error::AppError;
pub use traits::{SqlExecutor, SqlOutput};

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;
