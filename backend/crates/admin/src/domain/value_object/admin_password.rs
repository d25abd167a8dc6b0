//! Admin Password Value Object
//!
//! Domain wrappers around `platform::password`:
//! - [`RawPassword`] is what the admin typed (zeroized on drop)
//! - [`AdminPassword`] is the stored Argon2id PHC string

use kernel::error::app_error::{AppError, AppResult};
use platform::password::{ClearTextPassword, CredentialHasher, HashedPassword};
use std::fmt;

// ============================================================================
// Raw Password (User Input)
// ============================================================================

/// Raw password from user input
pub struct RawPassword(ClearTextPassword);

impl RawPassword {
    /// Create a password for a new account, enforcing the password policy
    ///
    /// ## Errors
    /// Returns a `BadRequest` `AppError` on the `pwd` field whose message is
    /// shown to the user.
    pub fn new(raw: String) -> AppResult<Self> {
        ClearTextPassword::new(raw)
            .map(Self)
            .map_err(|e| AppError::invalid_field("pwd", e.to_string()))
    }

    /// Wrap a password submitted at login (no policy checks)
    pub fn for_login(raw: String) -> Self {
        Self(ClearTextPassword::for_verification(raw))
    }

    pub(crate) fn inner(&self) -> &ClearTextPassword {
        &self.0
    }
}

impl fmt::Debug for RawPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RawPassword").field(&"[REDACTED]").finish()
    }
}

// ============================================================================
// Admin Password (Hashed, for storage)
// ============================================================================

/// Hashed admin password for database storage
#[derive(Clone, PartialEq, Eq)]
pub struct AdminPassword(HashedPassword);

impl AdminPassword {
    /// Hash a raw password
    pub fn hash(raw: &RawPassword, hasher: &CredentialHasher) -> AppResult<Self> {
        hasher
            .hash(raw.inner())
            .map(Self)
            .map_err(|e| AppError::internal("Password hashing failed").with_source(e))
    }

    /// Create from PHC string (from database)
    pub fn from_phc_string(phc_string: impl Into<String>) -> AppResult<Self> {
        HashedPassword::from_phc_string(phc_string)
            .map(Self)
            .map_err(|e| AppError::internal("Invalid password hash in database").with_source(e))
    }

    /// Get PHC string for database storage
    pub fn as_phc_string(&self) -> &str {
        self.0.as_phc_string()
    }

    /// Verify a raw password against this hash
    pub fn verify(&self, raw: &RawPassword, hasher: &CredentialHasher) -> bool {
        hasher.verify(raw.inner(), &self.0)
    }
}

impl fmt::Debug for AdminPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
