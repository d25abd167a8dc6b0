//! Admin Entity
//!
//! An administrator account. Admins are created by signup and are never
//! updated or deleted by this application.

use chrono::{DateTime, Utc};
use kernel::error::app_error::AppResult;
use platform::password::CredentialHasher;

use crate::domain::value_object::{
    admin_id::AdminId,
    admin_password::{AdminPassword, RawPassword},
    email::Email,
    person_name::PersonName,
};

/// Admin entity
#[derive(Debug, Clone)]
pub struct Admin {
    pub admin_id: AdminId,
    pub first_name: PersonName,
    pub last_name: PersonName,
    /// Unique across admins
    pub email: Email,
    /// Always produced by [`AdminPassword::hash`]
    pub password: AdminPassword,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Admin {
    /// Register a new admin, hashing the password
    ///
    /// Hashing is CPU bound; async callers run this on the blocking pool.
    pub fn register(
        first_name: PersonName,
        last_name: PersonName,
        email: Email,
        password: &RawPassword,
        hasher: &CredentialHasher,
    ) -> AppResult<Self> {
        let password = AdminPassword::hash(password, hasher)?;
        let now = Utc::now();

        Ok(Self {
            admin_id: AdminId::new(),
            first_name,
            last_name,
            email,
            password,
            created_at: now,
            updated_at: now,
        })
    }

    /// Check a login password
    pub fn verify_password(&self, password: &RawPassword, hasher: &CredentialHasher) -> bool {
        self.password.verify(password, hasher)
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
