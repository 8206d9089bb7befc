//! SQL statements for seeding the owner account
//!
//! The statements embed the credential string as a literal so they can be
//! pasted into any SQL console as is.

use miami_core::models::SeedUser;

/// Quote a value as a SQL string literal, doubling embedded single quotes
pub fn sql_literal(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

/// Upsert that creates the owner or resets its password and role
///
/// `id` comes from `gen_random_uuid()` and both timestamps from `NOW()`.
pub fn superadmin_upsert_sql(user: &SeedUser, password_hash: &str) -> String {
    let role = sql_literal(user.role.as_str());

    format!(
        "INSERT INTO users (id, email, password_hash, name, role, created_at, updated_at)\n\
         VALUES (gen_random_uuid(), {email}, {hash}, {name}, {role}, NOW(), NOW())\n\
         ON CONFLICT (email) DO UPDATE\n\
         SET password_hash = EXCLUDED.password_hash, role = {role};",
        email = sql_literal(&user.email),
        hash = sql_literal(password_hash),
        name = sql_literal(&user.name),
        role = role,
    )
}

/// Plain update for an owner row that already exists
pub fn password_reset_sql(user: &SeedUser, password_hash: &str) -> String {
    format!(
        "UPDATE users SET password_hash = {}, role = {}, updated_at = NOW() WHERE email = {};",
        sql_literal(password_hash),
        sql_literal(user.role.as_str()),
        sql_literal(&user.email),
    )
}
