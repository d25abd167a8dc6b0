//! Inventory Error Types
//!
//! Product-specific error variants that integrate with the unified
//! `kernel::error` system and end up as an [`Outcome`] at the HTTP boundary.

use std::borrow::Cow;

use kernel::error::{app_error::AppError, kind::ErrorKind};
use kernel::outcome::Outcome;
use sqlx::error::DatabaseError;
use thiserror::Error;

/// Inventory-specific result type alias
pub type ProductResult<T> = Result<T, ProductError>;

/// Product-specific error variants
///
/// Display strings of the client-facing variants are shown to the user as-is.
#[derive(Debug, Error)]
pub enum ProductError {
    /// No product under the requested id
    #[error("Product not found. Please try again.")]
    ProductNotFound,

    /// Another product already uses the name (case-insensitive)
    #[error("A product with this name already exists.")]
    NameTaken,

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

impl ProductError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ProductError::ProductNotFound => ErrorKind::NotFound,
            ProductError::NameTaken | ProductError::DuplicateKey => ErrorKind::BadRequest,
            ProductError::Validation(err) => err.kind(),
            ProductError::Database(_) | ProductError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Log the error with appropriate level
    pub fn log(&self) {
        match self {
            ProductError::Database(e) => {
                tracing::error!(error = %e, "Inventory database error");
            }
            ProductError::Internal(msg) => {
                tracing::error!(message = %msg, "Inventory internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Inventory error");
            }
        }
    }

    /// Convert into the outcome shown to the user
    ///
    /// Server-side failures are logged and replaced by the generic message.
    pub fn into_outcome(self, redirect_to: impl Into<Cow<'static, str>>) -> Outcome {
        self.log();
        if let ProductError::Validation(err) = &self {
            return Outcome::from_app_error(err, redirect_to);
        }
        match self.kind() {
            kind if kind.is_server_error() => Outcome::internal(redirect_to),
            kind => Outcome::failure(kind, self.to_string(), redirect_to),
        }
    }
}

impl From<AppError> for ProductError {
    fn from(err: AppError) -> Self {
        if err.is_client_error() {
            ProductError::Validation(err)
        } else {
            ProductError::Internal(err.to_string())
        }
    }
}

impl From<sqlx::Error> for ProductError {
    fn from(err: sqlx::Error) -> Self {
        match err.as_database_error().map(DatabaseError::kind) {
            Some(sqlx::error::ErrorKind::UniqueViolation) => ProductError::DuplicateKey,
            _ => ProductError::Database(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::outcome::GENERIC_FAILURE_MESSAGE;

    #[test]
    fn test_kinds() {
        assert_eq!(ProductError::ProductNotFound.kind(), ErrorKind::NotFound);
        assert_eq!(ProductError::NameTaken.kind(), ErrorKind::BadRequest);
        assert_eq!(ProductError::DuplicateKey.kind(), ErrorKind::BadRequest);
        assert_eq!(
            ProductError::Database(sqlx::Error::PoolClosed).kind(),
            ErrorKind::InternalServerError
        );
    }

    #[test]
    fn test_name_taken_outcome() {
        let outcome = ProductError::NameTaken.into_outcome("/admin/addProduct");
        assert!(!outcome.is_success());
        assert_eq!(outcome.status(), 400);
        assert_eq!(outcome.message(), "A product with this name already exists.");
        assert_eq!(outcome.redirect_to(), "/admin/addProduct");
    }

    #[test]
    fn test_database_outcome_is_generic() {
        let outcome =
            ProductError::Database(sqlx::Error::PoolTimedOut).into_outcome("/admin/dashboard");
        assert_eq!(outcome.status(), 500);
        assert_eq!(outcome.message(), GENERIC_FAILURE_MESSAGE);
    }
}
