//! Miami admin tools database layer
//!
//! This crate provides PostgreSQL access for the admin tools. It includes:
//!
//! - Connection pool management with sqlx
//! - `PgExecutor`, the sqlx implementation of `SqlExecutor`
//! - `MigrationRunner`, which applies a single SQL file and verifies it

pub mod executor;
pub mod migration;
pub mod pool;

pub use executor::PgExecutor;
pub use migration::{MigrationPlan, MigrationRunner, RunOutcome, Verification};
pub use pool::{connect_lazy, create_pool};

// Re-export commonly used types
pub use miami_core::{AppError, AppResult, SqlExecutor, SqlOutput};
pub use sqlx::PgPool;
