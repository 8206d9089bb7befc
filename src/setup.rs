//! Apply the owner upsert directly instead of printing it

use miami_auth::{superadmin_upsert_sql, PasswordService};
use miami_core::config::DATABASE_URL_VAR;
use miami_core::models::SeedUser;
use miami_core::{AppResult, SqlExecutor};
use miami_db::RunOutcome;
use std::io::Write;
use tracing::{error, info, instrument};

/// Hash `user.password`, upsert the row and report on `out`
///
/// Fails fast when no database URL is given, like the migration runner.
#[instrument(skip_all, fields(email = %user.email))]
pub async fn setup_superadmin<E, C, W>(
    database_url: Option<String>,
    connect: C,
    user: &SeedUser,
    passwords: &PasswordService,
    out: &mut W,
) -> AppResult<RunOutcome>
where
    E: SqlExecutor,
    C: FnOnce(&str) -> AppResult<E>,
    W: Write,
{
    let Some(database_url) = database_url else {
        writeln!(out, "ERROR: {} environment variable not set", DATABASE_URL_VAR)?;
        return Ok(RunOutcome::MissingDatabaseUrl);
    };

    let password_hash = passwords.hash_password(&user.password);
    let sql = superadmin_upsert_sql(user, &password_hash);

    let applied = match connect(&database_url) {
        Ok(executor) => executor.execute(&sql).await,
        Err(e) => Err(e),
    };

    match applied {
        Ok(_) => {
            info!("Superadmin upserted");
            writeln!(out, "✓ Superadmin account ready!")?;
            writeln!(out, "Email: {}", user.email)?;
            writeln!(out, "Role: {}", user.role)?;
            Ok(RunOutcome::Success)
        }
        Err(e) => {
            error!(code = e.error_code(), "Failed to set up superadmin: {}", e);
            writeln!(out, "❌ Failed to set up superadmin: {}", e)?;
            Ok(RunOutcome::Failed(e.to_string()))
        }
    }
}
