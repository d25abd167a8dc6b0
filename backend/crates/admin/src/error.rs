//! Admin Error Types
//!
//! Admin-specific error variants that integrate with the unified
//! `kernel::error` system and end up as an [`Outcome`] at the HTTP boundary.

use std::borrow::Cow;

use kernel::error::{app_error::AppError, kind::ErrorKind};
use kernel::outcome::Outcome;
use sqlx::error::DatabaseError;
use thiserror::Error;

/// Admin-specific result type alias
pub type AdminResult<T> = Result<T, AdminError>;

/// Admin-specific error variants
///
/// Display strings of the client-facing variants are shown to the user as-is.
#[derive(Debug, Error)]
pub enum AdminError {
    /// No admin registered under the submitted email
    #[error("Admin not found. Please try again.")]
    AdminNotFound,

    /// Wrong password
    #[error("Password does not match.")]
    PasswordMismatch,

    /// Email already registered
    #[error("Email already taken.")]
    EmailTaken,

    /// Password confirmation differs
    #[error("Passwords do not match.")]
    PasswordConfirmationMismatch,

    /// No session, bad signature, or expired session
    #[error("You must be logged in to access the page.")]
    SessionInvalid,

    /// Session points at an admin that no longer exists
    #[error("Admin not found.")]
    SessionAdminMissing,

    /// Field validation failure
    #[error("{}", .0.message())]
    Validation(AppError),

    /// Unique constraint violation reported by the store
    #[error("Duplicate key")]
    DuplicateKey,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[source] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AdminError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AdminError::AdminNotFound | AdminError::SessionAdminMissing => ErrorKind::NotFound,
            AdminError::PasswordMismatch | AdminError::SessionInvalid => ErrorKind::Unauthorized,
            AdminError::EmailTaken
            | AdminError::PasswordConfirmationMismatch
            | AdminError::DuplicateKey => ErrorKind::BadRequest,
            AdminError::Validation(err) => err.kind(),
            AdminError::Database(_) | AdminError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Log the error with appropriate level
    pub fn log(&self) {
        match self {
            AdminError::Database(e) => {
                tracing::error!(error = %e, "Admin database error");
            }
            AdminError::Internal(msg) => {
                tracing::error!(message = %msg, "Admin internal error");
            }
            AdminError::AdminNotFound | AdminError::PasswordMismatch => {
                tracing::warn!(error = %self, "Failed login attempt");
            }
            AdminError::SessionAdminMissing => {
                tracing::warn!("Session refers to a missing admin");
            }
            _ => {
                tracing::debug!(error = %self, "Admin error");
            }
        }
    }

    /// Convert into the outcome shown to the user
    ///
    /// Server-side failures are logged and replaced by the generic message.
    pub fn into_outcome(self, redirect_to: impl Into<Cow<'static, str>>) -> Outcome {
        self.log();
        if let AdminError::Validation(err) = &self {
            return Outcome::from_app_error(err, redirect_to);
        }
        match self.kind() {
            kind if kind.is_server_error() => Outcome::internal(redirect_to),
            kind => Outcome::failure(kind, self.to_string(), redirect_to),
        }
    }
}

impl From<AppError> for AdminError {
    fn from(err: AppError) -> Self {
        if err.is_client_error() {
            AdminError::Validation(err)
        } else {
            AdminError::Internal(err.to_string())
        }
    }
}

impl From<sqlx::Error> for AdminError {
    fn from(err: sqlx::Error) -> Self {
        match err.as_database_error().map(DatabaseError::kind) {
            Some(sqlx::error::ErrorKind::UniqueViolation) => AdminError::DuplicateKey,
            _ => AdminError::Database(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::outcome::GENERIC_FAILURE_MESSAGE;

    #[test]
    fn test_kinds() {
        assert_eq!(AdminError::AdminNotFound.kind(), ErrorKind::NotFound);
        assert_eq!(AdminError::PasswordMismatch.kind(), ErrorKind::Unauthorized);
        assert_eq!(AdminError::EmailTaken.kind(), ErrorKind::BadRequest);
        assert_eq!(AdminError::DuplicateKey.kind(), ErrorKind::BadRequest);
        assert_eq!(
            AdminError::Internal("boom".into()).kind(),
            ErrorKind::InternalServerError
        );
    }

    #[test]
    fn test_validation_keeps_message() {
        let err: AdminError = AppError::invalid_field("email", "Email is required.").into();
        assert_eq!(err.to_string(), "Email is required.");
        assert_eq!(err.kind(), ErrorKind::BadRequest);
    }

    #[test]
    fn test_internal_outcome_is_generic() {
        let outcome = AdminError::Internal("pool closed".into()).into_outcome("/admin/login");
        assert_eq!(outcome.status(), 500);
        assert_eq!(outcome.message(), GENERIC_FAILURE_MESSAGE);
    }

    #[test]
    fn test_row_not_found_is_database_error() {
        let err: AdminError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, AdminError::Database(_)));
    }
}
