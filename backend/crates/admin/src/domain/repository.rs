//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use uuid::Uuid;

use crate::domain::entity::{admin::Admin, admin_session::AdminSession};
use crate::domain::value_object::{admin_id::AdminId, email::Email};
use crate::error::AdminResult;

/// Admin account store
#[trait_variant::make(AdminRepository: Send)]
pub trait LocalAdminRepository {
    /// Persist a new admin
    ///
    /// Fails with `AdminError::DuplicateKey` when the email is already
    /// registered, even if a prior existence check passed.
    async fn create(&self, admin: &Admin) -> AdminResult<()>;

    /// Find admin by ID
    async fn find_by_id(&self, admin_id: &AdminId) -> AdminResult<Option<Admin>>;

    /// Find admin by email (exact match)
    async fn find_by_email(&self, email: &Email) -> AdminResult<Option<Admin>>;

    /// Check if email is registered
    async fn exists_by_email(&self, email: &Email) -> AdminResult<bool>;
}

/// Admin session store
#[trait_variant::make(AdminSessionRepository: Send)]
pub trait LocalAdminSessionRepository {
    /// Create a new session
    async fn create_session(&self, session: &AdminSession) -> AdminResult<()>;

    /// Find session by ID (expired sessions are returned too)
    async fn find_session(&self, session_id: Uuid) -> AdminResult<Option<AdminSession>>;

    /// Delete a session
    async fn delete_session(&self, session_id: Uuid) -> AdminResult<()>;

    /// Clean up expired sessions
    async fn cleanup_expired_sessions(&self) -> AdminResult<u64>;
}
