//! Credential hashing and seed SQL for the Miami admin tools
//!
//! This crate produces the `salt:digest` credential strings the application
//! stores in `users.password_hash`, and renders the SQL statements used to
//! seed or reset the owner account.
//!
//! # Examples
//!
//! ```
//! use miami_auth::{superadmin_upsert_sql, PasswordService};
//! use miami_core::models::SeedUser;
//!
//! let user = SeedUser::superadmin();
//! let password_service = PasswordService::new();
//! let hash = password_service.hash_password(&user.password);
//! assert!(password_service.verify_password(&user.password, &hash)?);
//!
//! let sql = superadmin_upsert_sql(&user, &hash);
//! assert!(sql.contains("ON CONFLICT (email)"));
//! # Ok::<(), miami_core::AppError>(())
//! ```

pub mod password;
pub mod seed;

pub use password::PasswordService;
pub use seed::{password_reset_sql, sql_literal, superadmin_upsert_sql};
