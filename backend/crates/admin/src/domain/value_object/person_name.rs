//! Person Name Value Object
//!
//! First and last names of an administrator.

use kernel::error::app_error::{AppError, AppResult};
use unicode_normalization::UnicodeNormalization;

const NAME_MAX_LENGTH: usize = 100;

/// A trimmed, non-empty personal name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonName(String);

impl PersonName {
    /// Validate a first name (`firstName` form field)
    pub fn first(raw: impl AsRef<str>) -> AppResult<Self> {
        Self::parse(raw.as_ref(), "firstName", "First name")
    }

    /// Validate a last name (`lastName` form field)
    pub fn last(raw: impl AsRef<str>) -> AppResult<Self> {
        Self::parse(raw.as_ref(), "lastName", "Last name")
    }

    fn parse(raw: &str, field: &'static str, label: &str) -> AppResult<Self> {
        let name: String = raw.trim().nfc().collect();

        if name.is_empty() {
            return Err(AppError::invalid_field(
                field,
                format!("{} is required.", label),
            ));
        }

        if name.chars().count() > NAME_MAX_LENGTH {
            return Err(AppError::invalid_field(
                field,
                format!("{} must be at most {} characters.", label, NAME_MAX_LENGTH),
            ));
        }

        if name.chars().any(char::is_control) {
            return Err(AppError::invalid_field(
                field,
                format!("{} contains invalid characters.", label),
            ));
        }

        Ok(Self(name))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PersonName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
