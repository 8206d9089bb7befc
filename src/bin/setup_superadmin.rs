//! Upsert the owner account directly into DATABASE_URL

use miami_admin::{init_tracing, pg_connect, setup_superadmin};
use miami_auth::PasswordService;
use miami_core::config::database_url_from_env;
use miami_core::models::SeedUser;
use std::io::{self, Write};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let mut stdout = io::stdout();
    let outcome = setup_superadmin(
        database_url_from_env(),
        pg_connect,
        &SeedUser::superadmin(),
        &PasswordService::new(),
        &mut stdout,
    )
    .await?;
    stdout.flush()?;

    std::process::exit(outcome.exit_code());
}
