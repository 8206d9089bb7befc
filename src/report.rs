//! Text printed by the credential tools

use miami_auth::{password_reset_sql, superadmin_upsert_sql};
use miami_core::models::SeedUser;

/// Output of `create_superadmin`: label, credential, then the upsert
pub fn superadmin_report(user: &SeedUser, password_hash: &str) -> String {
    format!(
        "Generated password hash:\n{}\n\nSQL to insert superadmin user:\n{}\n",
        password_hash,
        superadmin_upsert_sql(user, password_hash)
    )
}

/// Output of `fix_superadmin_password`
pub fn password_reset_report(user: &SeedUser, password_hash: &str) -> String {
    format!(
        "Generated password hash for {}:\n{}\n\nRun this SQL to update the user:\n{}\n",
        user.email,
        password_hash,
        password_reset_sql(user, password_hash)
    )
}
