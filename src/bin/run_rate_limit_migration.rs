//! Apply scripts/009_rate_limit_system.sql and count rate_limit_configs
//!
//! Exits 1 when DATABASE_URL is missing or the database rejects the
//! migration or the verification query.

use miami_admin::{init_tracing, run_migration_plan};
use miami_core::config::database_url_from_env;
use miami_db::MigrationPlan;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let outcome = run_migration_plan(
        MigrationPlan::rate_limit_system(),
        database_url_from_env(),
        &mut std::io::stdout(),
    )
    .await?;
    std::process::exit(outcome.exit_code());
}
