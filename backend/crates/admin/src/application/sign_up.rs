//! Sign Up Use Case
//!
//! Registers a new admin account.

use std::sync::Arc;

use crate::application::config::AdminConfig;
use crate::domain::entity::admin::Admin;
use crate::domain::repository::AdminRepository;
use crate::domain::value_object::{
    admin_id::AdminId, admin_password::RawPassword, email::Email, person_name::PersonName,
};
use crate::error::{AdminError, AdminResult};

/// Sign up input
pub struct SignUpInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
}

/// Sign up output
#[derive(Debug)]
pub struct SignUpOutput {
    pub admin_id: AdminId,
}

/// Sign up use case
pub struct SignUpUseCase<A>
where
    A: AdminRepository,
{
    admin_repo: Arc<A>,
    config: Arc<AdminConfig>,
}

impl<A> SignUpUseCase<A>
where
    A: AdminRepository,
{
    pub fn new(admin_repo: Arc<A>, config: Arc<AdminConfig>) -> Self {
        Self { admin_repo, config }
    }

    /// Checks run in a fixed order: taken email, then password confirmation,
    /// then field validation.
    pub async fn execute(&self, input: SignUpInput) -> AdminResult<SignUpOutput> {
        let email = Email::new(&input.email);

        // A malformed address cannot be registered, so it cannot be taken either
        if let Ok(email) = &email {
            if self.admin_repo.exists_by_email(email).await? {
                return Err(AdminError::EmailTaken);
            }
        }

        if input.password != input.password_confirmation {
            return Err(AdminError::PasswordConfirmationMismatch);
        }

        let first_name = PersonName::first(&input.first_name)?;
        let last_name = PersonName::last(&input.last_name)?;
        let email = email?;
        let password = RawPassword::new(input.password)?;

        let hasher = self.config.hasher();
        let admin = tokio::task::spawn_blocking(move || {
            Admin::register(first_name, last_name, email, &password, &hasher)
        })
        .await
        .map_err(|e| AdminError::Internal(format!("Password hashing task failed: {e}")))??;

        // The unique index decides when two signups race past the check above
        match self.admin_repo.create(&admin).await {
            Err(AdminError::DuplicateKey) => return Err(AdminError::EmailTaken),
            result => result?,
        }

        tracing::info!(
            admin_id = %admin.admin_id,
            email = %admin.email,
            "Admin signed up"
        );

        Ok(SignUpOutput {
            admin_id: admin.admin_id,
        })
    }
}
