//! Miami admin tools
//!
//! One-shot maintenance binaries for the Miami application database:
//!
//! - `create_superadmin` / `fix_superadmin_password`: print a fresh owner
//!   credential and the SQL that stores it
//! - `setup_superadmin`: apply that upsert directly
//! - `run_rate_limit_migration` / `run_threads_migration`: apply a migration
//!   file and report the outcome
//!
//! The binaries are thin; the flows live here so they can be tested against a
//! fake `SqlExecutor`.

pub mod migrate;
pub mod report;
pub mod setup;
pub mod telemetry;

pub use migrate::{pg_connect, run_migration_plan};
pub use report::{password_reset_report, superadmin_report};
pub use setup::setup_superadmin;
pub use telemetry::init_tracing;
