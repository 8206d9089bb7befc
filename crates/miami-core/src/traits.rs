//! Database capability used by the admin tools
//!
//! The tools never depend on a concrete driver. They talk to a `SqlExecutor`,
//! which lets the migration and seeding flows run against a fake in tests.

use crate::error::AppError;
use async_trait::async_trait;
use std::fmt;

/// Opaque result of a SQL round trip
///
/// Callers relay it with `Display` and never look inside.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlOutput {
    /// Rows returned by a query, as a JSON array of objects
    Rows(serde_json::Value),
    /// Outcome of a statement batch that returns no rows
    Command { rows_affected: u64 },
}

impl fmt::Display for SqlOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SqlOutput::Rows(rows) => write!(f, "{}", rows),
            SqlOutput::Command { rows_affected } => {
                write!(f, "{{\"rows_affected\":{}}}", rows_affected)
            }
        }
    }
}

/// Minimal "run this SQL text" capability
#[async_trait]
pub trait SqlExecutor: Send + Sync {
    /// Execute a statement batch (may contain several `;`-separated statements)
    async fn execute(&self, sql: &str) -> Result<SqlOutput, AppError>;

    /// Run a single query and return its rows
    async fn query(&self, sql: &str) -> Result<SqlOutput, AppError>;
}
