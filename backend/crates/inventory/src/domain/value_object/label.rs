//! Shared rules for short free-text labels (product name, category)

use kernel::error::app_error::{AppError, AppResult};
use unicode_normalization::UnicodeNormalization;

pub(super) const LABEL_MIN_LENGTH: usize = 2;
pub(super) const LABEL_MAX_LENGTH: usize = 100;

/// Trim, NFC-normalize and length-check a label
pub(super) fn normalize(raw: &str, field: &'static str, label: &str) -> AppResult<String> {
    let value: String = raw.trim().nfc().collect();
    let length = value.chars().count();

    if value.is_empty() {
        return Err(AppError::invalid_field(
            field,
            format!("{} is required.", label),
        ));
    }

    if length < LABEL_MIN_LENGTH {
        return Err(AppError::invalid_field(
            field,
            format!(
                "{} must be at least {} characters long.",
                label, LABEL_MIN_LENGTH
            ),
        ));
    }

    if length > LABEL_MAX_LENGTH {
        return Err(AppError::invalid_field(
            field,
            format!("{} must be at most {} characters.", label, LABEL_MAX_LENGTH),
        ));
    }

    if value.chars().any(char::is_control) {
        return Err(AppError::invalid_field(
            field,
            format!("{} contains invalid characters.", label),
        ));
    }

    Ok(value)
}
