//! Domain models for the admin tools

pub mod user;

pub use user::{SeedUser, UserRole};
