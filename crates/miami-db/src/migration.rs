//! One-shot migration runner
//!
//! Applies a single SQL file as one statement batch and optionally runs a
//! verification query afterwards. There is no tracking table and no ordering
//! between migrations: each plan is run on demand by its own binary.
//!
//! The run is linear:
//!
//! ```text
//! DATABASE_URL set? --no--> "ERROR: ..."            exit 1
//!   read SQL file   --err-> propagated to the caller
//!   execute batch   --err-> "❌ Migration failed: .." exit 1
//!   verify query    --err-> "❌ Migration failed: .." exit 1
//!   success                                           exit 0
//! ```

use miami_core::config::DATABASE_URL_VAR;
use miami_core::{AppError, AppResult, SqlExecutor, SqlOutput};
use std::io::Write;
use std::path::PathBuf;
use tracing::{error, info, instrument};

/// Query run after a migration to show it landed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verification {
    pub sql: String,
    /// Table named in the report line
    pub table: String,
}

/// A migration file plus how to check it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationPlan {
    /// Human readable name used in logs
    pub label: String,
    pub sql_path: PathBuf,
    pub verification: Option<Verification>,
}

impl MigrationPlan {
    /// Rate limiting tables, verified by counting `rate_limit_configs`
    pub fn rate_limit_system() -> Self {
        Self {
            label: "rate limit system".to_string(),
            sql_path: PathBuf::from("scripts/009_rate_limit_system.sql"),
            verification: Some(Verification {
                sql: "SELECT COUNT(*) as count FROM rate_limit_configs;".to_string(),
                table: "rate_limit_configs".to_string(),
            }),
        }
    }

    /// Conversation threads tables
    pub fn threads() -> Self {
        Self {
            label: "threads".to_string(),
            sql_path: PathBuf::from("scripts/011-add-threads.sql"),
            verification: None,
        }
    }
}

/// How a run ended, mapped to the process exit code
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    Success,
    MissingDatabaseUrl,
    /// Execution or verification failed with this message
    Failed(String),
}

impl RunOutcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            RunOutcome::Success => 0,
            RunOutcome::MissingDatabaseUrl | RunOutcome::Failed(_) => 1,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, RunOutcome::Success)
    }
}

/// Applies one `MigrationPlan`
#[derive(Debug, Clone)]
pub struct MigrationRunner {
    plan: MigrationPlan,
}

impl MigrationRunner {
    pub fn new(plan: MigrationPlan) -> Self {
        Self { plan }
    }

    pub fn plan(&self) -> &MigrationPlan {
        &self.plan
    }

    /// Run the plan, writing the report lines to `out`
    ///
    /// `connect` is only called once the URL is known and the file has been
    /// read; an error from it is reported like any execution failure.
    ///
    /// # Errors
    ///
    /// Only unchecked faults are returned: an unreadable migration file or a
    /// failing `out` writer. Database failures become `RunOutcome::Failed`.
    #[instrument(skip_all, fields(migration = %self.plan.label))]
    pub async fn run<E, C, W>(
        &self,
        database_url: Option<String>,
        connect: C,
        out: &mut W,
    ) -> AppResult<RunOutcome>
    where
        E: SqlExecutor,
        C: FnOnce(&str) -> AppResult<E>,
        W: Write,
    {
        let Some(database_url) = database_url else {
            error!("{} is not set", DATABASE_URL_VAR);
            writeln!(out, "ERROR: {} environment variable not set", DATABASE_URL_VAR)?;
            return Ok(RunOutcome::MissingDatabaseUrl);
        };

        info!("Running {} migration...", self.plan.label);

        let path = &self.plan.sql_path;
        let migration_sql = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| AppError::io(path.display().to_string(), e))?;

        info!(
            path = %path.display(),
            bytes = migration_sql.len(),
            "Loaded migration file"
        );

        match self.apply(&database_url, connect, &migration_sql, out).await {
            Ok(()) => Ok(RunOutcome::Success),
            Err(StepError::Output(e)) => Err(e.into()),
            Err(StepError::Database(e)) => {
                error!(code = e.error_code(), "Migration failed: {}", e);
                writeln!(out, "❌ Migration failed: {}", e)?;
                Ok(RunOutcome::Failed(e.to_string()))
            }
        }
    }

    async fn apply<E, C, W>(
        &self,
        database_url: &str,
        connect: C,
        migration_sql: &str,
        out: &mut W,
    ) -> Result<(), StepError>
    where
        E: SqlExecutor,
        C: FnOnce(&str) -> AppResult<E>,
        W: Write,
    {
        let executor = connect(database_url)?;

        let result = executor.execute(migration_sql).await?;
        info!("Migration batch executed");
        writeln!(out, "✅ Migration completed successfully! Result: {}", result)?;

        if let Some(verification) = &self.plan.verification {
            let counted: SqlOutput = executor.query(&verification.sql).await?;
            writeln!(
                out,
                "✅ Verified: {} table has {} rows",
                verification.table, counted
            )?;
        }

        Ok(())
    }
}

/// Why a step stopped: the database is reported, the writer is propagated
enum StepError {
    Database(AppError),
    Output(std::io::Error),
}

impl From<AppError> for StepError {
    fn from(err: AppError) -> Self {
        StepError::Database(err)
    }
}

impl From<std::io::Error> for StepError {
    fn from(err: std::io::Error) -> Self {
        StepError::Output(err)
    }
}
