//! sqlx implementation of `SqlExecutor`

use async_trait::async_trait;
use miami_core::{AppError, AppResult, SqlExecutor, SqlOutput};
use sqlx::PgPool;
use tracing::{debug, error, instrument};

/// PostgreSQL implementation of SqlExecutor
#[derive(Debug, Clone)]
pub struct PgExecutor {
    pool: PgPool,
}

impl PgExecutor {
    /// Create a new executor over an existing pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

/// Wrap a query so its rows come back as one JSON array, whatever their shape
pub(crate) fn rows_as_json(sql: &str) -> String {
    let inner = sql.trim().trim_end_matches(';').trim_end();
    format!(
        "SELECT COALESCE(json_agg(q), '[]'::json) AS rows FROM ({}) AS q",
        inner
    )
}

#[async_trait]
impl SqlExecutor for PgExecutor {
    #[instrument(skip(self, sql), fields(sql_len = sql.len()))]
    async fn execute(&self, sql: &str) -> AppResult<SqlOutput> {
        debug!("Executing statement batch");

        let result = sqlx::raw_sql(sql).execute(&self.pool).await.map_err(|e| {
            error!("Statement batch failed: {}", e);
            AppError::Database(e.to_string())
        })?;

        Ok(SqlOutput::Command {
            rows_affected: result.rows_affected(),
        })
    }

    #[instrument(skip(self, sql))]
    async fn query(&self, sql: &str) -> AppResult<SqlOutput> {
        debug!("Running query: {}", sql);

        let wrapped = rows_as_json(sql);
        let rows = sqlx::query_scalar::<_, serde_json::Value>(&wrapped)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                error!("Query failed: {}", e);
                AppError::Database(e.to_string())
            })?;

        Ok(SqlOutput::Rows(rows))
    }
}
