//! User model
//!
//! The admin tools only ever write one user: the application owner.

use std::fmt;

/// Email of the owner account
pub const SUPERADMIN_EMAIL: &str = "spencer@miami.ai";

/// Display name of the owner account
pub const SUPERADMIN_NAME: &str = "Spencer";

/// Plaintext password seeded for the owner account
pub const SUPERADMIN_PASSWORD: &str = "PAssword!33!";

/// User role enumeration, as stored in `users.role`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UserRole {
    /// Regular signed-up user
    #[default]
    User,
    /// Administrator with access to the admin pages
    Admin,
    /// Application owner, the most privileged role
    Owner,
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::User => "user",
            UserRole::Admin => "admin",
            UserRole::Owner => "owner",
        }
    }
}

/// Account written by the seeding tools
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedUser {
    pub email: String,
    pub name: String,
    pub role: UserRole,
    /// Plaintext password; never printed by the tools
    pub password: String,
}

impl SeedUser {
    /// The owner account every environment is seeded with
    pub fn superadmin() -> Self {
        Self {
            email: SUPERADMIN_EMAIL.to_string(),
            name: SUPERADMIN_NAME.to_string(),
            role: UserRole::Owner,
            password: SUPERADMIN_PASSWORD.to_string(),
        }
    }
}
