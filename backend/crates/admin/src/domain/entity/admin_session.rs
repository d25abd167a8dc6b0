//! Admin Session Entity
//!
//! Server-side session created at login. The browser only holds a signed
//! reference to `session_id`.

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::domain::entity::admin::Admin;
use crate::domain::value_object::{admin_id::AdminId, email::Email, person_name::PersonName};

/// Admin session entity
///
/// Carries the minimal identity projection of the admin who logged in.
#[derive(Debug, Clone)]
pub struct AdminSession {
    pub session_id: Uuid,
    pub admin_id: AdminId,
    pub email: Email,
    pub first_name: PersonName,
    pub last_name: PersonName,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl AdminSession {
    /// Open a session for an admin
    ///
    /// TTL is provided by the application layer (config), not hard-coded here.
    pub fn open(admin: &Admin, ttl: Duration) -> Self {
        let now = Utc::now();

        Self {
            session_id: Uuid::new_v4(),
            admin_id: admin.admin_id,
            email: admin.email.clone(),
            first_name: admin.first_name.clone(),
            last_name: admin.last_name.clone(),
            created_at: now,
            expires_at: now + ttl,
        }
    }

    /// Check if session has expired
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}
