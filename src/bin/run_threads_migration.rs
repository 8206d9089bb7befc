//! Apply scripts/011-add-threads.sql

use miami_admin::{init_tracing, run_migration_plan};
use miami_core::config::database_url_from_env;
use miami_db::MigrationPlan;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let outcome = run_migration_plan(
        MigrationPlan::threads(),
        database_url_from_env(),
        &mut std::io::stdout(),
    )
    .await?;
    std::process::exit(outcome.exit_code());
}
