//! Sign In Use Case
//!
//! Authenticates an admin and opens a server-side session.

use std::sync::Arc;

use crate::application::{config::AdminConfig, session_token};
use crate::domain::entity::admin_session::AdminSession;
use crate::domain::repository::{AdminRepository, AdminSessionRepository};
use crate::domain::value_object::{admin_password::RawPassword, email::Email};
use crate::error::{AdminError, AdminResult};

/// Sign in input
pub struct SignInInput {
    pub email: String,
    pub password: String,
}

/// Sign in output
#[derive(Debug)]
pub struct SignInOutput {
    /// Signed session token for the cookie
    pub session_token: String,
    pub first_name: String,
}

/// Sign in use case
pub struct SignInUseCase<A, S>
where
    A: AdminRepository,
    S: AdminSessionRepository,
{
    admin_repo: Arc<A>,
    session_repo: Arc<S>,
    config: Arc<AdminConfig>,
}

impl<A, S> SignInUseCase<A, S>
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

    pub async fn execute(&self, input: SignInInput) -> AdminResult<SignInOutput> {
        // No admin can be registered under a malformed address
        let email = Email::new(&input.email).map_err(|_| AdminError::AdminNotFound)?;

        let admin = self
            .admin_repo
            .find_by_email(&email)
            .await?
            .ok_or(AdminError::AdminNotFound)?;

        let password = RawPassword::for_login(input.password);
        let hasher = self.config.hasher();
        let stored = admin.password.clone();
        let password_valid =
            tokio::task::spawn_blocking(move || stored.verify(&password, &hasher))
                .await
                .map_err(|e| {
                    AdminError::Internal(format!("Password verification task failed: {e}"))
                })?;

        if !password_valid {
            return Err(AdminError::PasswordMismatch);
        }

        let session = AdminSession::open(&admin, self.config.session_ttl_chrono());
        self.session_repo.create_session(&session).await?;

        let session_token = session_token::sign(&self.config.session_secret, session.session_id)?;

        tracing::info!(
            admin_id = %admin.admin_id,
            session_id = %session.session_id,
            "Admin signed in"
        );

        Ok(SignInOutput {
            session_token,
            first_name: admin.first_name.to_string(),
        })
    }
}
