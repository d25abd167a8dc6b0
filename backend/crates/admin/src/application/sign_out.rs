//! Sign Out Use Case
//!
//! Destroys an admin session.

use std::sync::Arc;

use crate::application::{config::AdminConfig, session_token};
use crate::domain::repository::AdminSessionRepository;
use crate::error::{AdminError, AdminResult};

/// Sign out use case
pub struct SignOutUseCase<S>
where
    S: AdminSessionRepository,
{
    session_repo: Arc<S>,
    config: Arc<AdminConfig>,
}

impl<S> SignOutUseCase<S>
where
    S: AdminSessionRepository,
{
    pub fn new(session_repo: Arc<S>, config: Arc<AdminConfig>) -> Self {
        Self {
            session_repo,
            config,
        }
    }

    /// Sign out from current session
    pub async fn execute(&self, session_token: &str) -> AdminResult<()> {
        let session_id = session_token::verify(&self.config.session_secret, session_token)
            .ok_or(AdminError::SessionInvalid)?;

        self.session_repo.delete_session(session_id).await?;

        tracing::info!(session_id = %session_id, "Admin signed out");
        Ok(())
    }
}
