//! Check Session Use Case
//!
//! Resolves a session token to the admin it belongs to. The admin record is
//! looked up again on every call, so a deleted admin loses access at once.

use std::sync::Arc;

use crate::application::{config::AdminConfig, session_token};
use crate::domain::entity::admin::Admin;
use crate::domain::repository::{AdminRepository, AdminSessionRepository};
use crate::error::{AdminError, AdminResult};

/// Check session use case
pub struct CheckSessionUseCase<A, S>
where
    A: AdminRepository,
    S: AdminSessionRepository,
{
    admin_repo: Arc<A>,
    session_repo: Arc<S>,
    config: Arc<AdminConfig>,
}

impl<A, S> CheckSessionUseCase<A, S>
where
    A: AdminRepository,
    S: AdminSessionRepository,
{
    pub fn new(admin_repo: Arc<A>, session_repo: Arc<S>, config: Arc<AdminConfig>) -> Self {
        Self {
            admin_repo,
            session_repo,
            config,
        }
    }

    /// ## Errors
    /// * `SessionInvalid` - no token, bad signature, unknown or expired session
    /// * `SessionAdminMissing` - the session's admin no longer exists
    pub async fn execute(&self, session_token: Option<&str>) -> AdminResult<Admin> {
        let session_id = session_token
            .and_then(|token| session_token::verify(&self.config.session_secret, token))
            .ok_or(AdminError::SessionInvalid)?;

        let session = self
            .session_repo
            .find_session(session_id)
            .await?
            .ok_or(AdminError::SessionInvalid)?;

        if session.is_expired() {
            self.session_repo.delete_session(session_id).await?;
            return Err(AdminError::SessionInvalid);
        }

        self.admin_repo
            .find_by_id(&session.admin_id)
            .await?
            .ok_or(AdminError::SessionAdminMissing)
    }
}
