//! Unified error handling for the admin tools
//!
//! Every fallible operation in the workspace returns this error type. The
//! binaries decide which variants are reported on stdout and which ones are
//! left to propagate out of `main`.

use thiserror::Error;

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    // ==================== Database Errors ====================
    #[error("Database error: {0}")]
    Database(String),

    #[error("Database pool error: {0}")]
    Pool(String),

    // ==================== Authentication Errors ====================
    #[error("Password hashing failed: {0}")]
    PasswordHash(String),

    // ==================== Environment Errors ====================
    #[error("{0} environment variable not set")]
    MissingEnv(&'static str),

    #[error("Failed to read {path}: {message}")]
    Io { path: String, message: String },

    // ==================== Internal Errors ====================
    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl AppError {
    /// Returns a short machine-friendly code, used as a tracing field
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::Database(_) => "database_error",
            AppError::Pool(_) => "pool_error",
            AppError::PasswordHash(_) => "password_error",
            AppError::MissingEnv(_) => "missing_env",
            AppError::Io { .. } => "io_error",
            AppError::Internal(_) => "internal_error",
            AppError::Config(_) => "config_error",
            AppError::Serialization(_) => "serialization_error",
        }
    }

    /// Build an I/O error that remembers which file was involved
    pub fn io(path: impl Into<String>, err: std::io::Error) -> Self {
        AppError::Io {
            path: path.into(),
            message: err.to_string(),
        }
    }
}

// ==================== From implementations ====================

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}
