//! Glue between the binaries and the database layer

use miami_core::{AppResult, ToolConfig};
use miami_db::{connect_lazy, MigrationPlan, MigrationRunner, PgExecutor, RunOutcome};
use std::io::Write;
use tracing::info;

/// Build a lazily connected executor for `database_url`
///
/// Tool configuration is read here, after the URL check, and a broken
/// configuration falls back to defaults.
pub fn pg_connect(database_url: &str) -> AppResult<PgExecutor> {
    let config = ToolConfig::load_or_default();
    Ok(PgExecutor::new(connect_lazy(database_url, &config.database)?))
}

/// Run `plan` against `database_url`, reporting on `out`
pub async fn run_migration_plan<W: Write>(
    plan: MigrationPlan,
    database_url: Option<String>,
    out: &mut W,
) -> AppResult<RunOutcome> {
    let outcome = MigrationRunner::new(plan)
        .run(database_url, pg_connect, out)
        .await?;
    out.flush()?;

    info!(exit_code = outcome.exit_code(), "Migration run finished");
    Ok(outcome)
}
