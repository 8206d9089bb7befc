//! Password hashing and verification using salted SHA-256
//!
//! Credentials are stored as `<salt_hex>:<digest_hex>` where the salt is 16
//! random bytes in lowercase hex and the digest is SHA-256 over the UTF-8
//! text `password + salt_hex`. The salt is mixed in as hex text, not as raw
//! bytes, so the application's verifier can recompute it from the stored
//! string alone.

use miami_core::error::AppError;
use rand_core::{OsRng, RngCore};
use sha2::{Digest, Sha256};
use tracing::{debug, error};

/// Number of random bytes in a salt
pub const SALT_LEN: usize = 16;

const SEPARATOR: char = ':';

/// Password hashing service using salted SHA-256
#[derive(Debug, Clone, Copy, Default)]
pub struct PasswordService;

impl PasswordService {
    /// Create a new password service
    ///
    /// # Examples
    ///
    /// ```
    /// use miami_auth::PasswordService;
    ///
    /// let password_service = PasswordService::new();
    /// ```
    pub fn new() -> Self {
        Self
    }

    /// Generate a fresh salt from the OS CSPRNG, hex-encoded
    ///
    /// Panics if the OS entropy source is unavailable.
    pub fn generate_salt(&self) -> String {
        let mut salt = [0u8; SALT_LEN];
        OsRng.fill_bytes(&mut salt);
        hex::encode(salt)
    }

    /// Hash a password with a freshly generated salt
    ///
    /// # Returns
    ///
    /// The combined credential string `<salt_hex>:<digest_hex>`
    ///
    /// # Examples
    ///
    /// ```
    /// use miami_auth::PasswordService;
    ///
    /// let password_service = PasswordService::new();
    /// let hash = password_service.hash_password("my_secure_password");
    /// assert_eq!(hash.len(), 32 + 1 + 64);
    /// ```
    pub fn hash_password(&self, password: &str) -> String {
        debug!("Hashing password");

        let salt = self.generate_salt();
        self.hash_with_salt(password, &salt)
    }

    /// Hash a password with a caller-supplied hex salt
    pub fn hash_with_salt(&self, password: &str, salt_hex: &str) -> String {
        format!("{}{}{}", salt_hex, SEPARATOR, digest_hex(password, salt_hex))
    }

    /// Verify a password against a stored credential string
    ///
    /// # Returns
    ///
    /// Returns `Ok(true)` if the password matches the hash,
    /// `Ok(false)` if it doesn't match
    ///
    /// # Errors
    ///
    /// Returns `AppError::PasswordHash` if the stored value has no `:` separator
    ///
    /// # Examples
    ///
    /// ```
    /// use miami_auth::PasswordService;
    ///
    /// let password_service = PasswordService::new();
    /// let hash = password_service.hash_password("my_password");
    ///
    /// assert!(password_service.verify_password("my_password", &hash)?);
    /// assert!(!password_service.verify_password("wrong_password", &hash)?);
    /// # Ok::<(), miami_core::AppError>(())
    /// ```
    pub fn verify_password(&self, password: &str, stored: &str) -> Result<bool, AppError> {
        debug!("Verifying password");

        let (salt, expected) = stored.split_once(SEPARATOR).ok_or_else(|| {
            error!("Stored password hash has no salt separator");
            AppError::PasswordHash("Invalid password hash format: missing ':'".to_string())
        })?;

        let matches = digest_hex(password, salt) == expected;
        debug!(matches, "Password verification finished");
        Ok(matches)
    }
}

fn digest_hex(password: &str, salt_hex: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    hasher.update(salt_hex.as_bytes());
    hex::encode(hasher.finalize())
}
