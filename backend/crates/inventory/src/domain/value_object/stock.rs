//! Stock Value Object

use kernel::error::app_error::{AppError, AppResult};

const FIELD: &str = "stock";

/// Units on hand; never negative
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Stock(i32);

impl Stock {
    /// Parse the `stock` form field
    pub fn parse(raw: &str) -> AppResult<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(AppError::invalid_field(FIELD, "Stock quantity is required."));
        }

        let value: i64 = raw.parse().map_err(|e| {
            AppError::invalid_field(FIELD, "Stock quantity must be a whole number.").with_source(e)
        })?;

        Self::new(value)
    }

    pub fn new(value: i64) -> AppResult<Self> {
        if value < 0 {
            return Err(AppError::invalid_field(
                FIELD,
                "Stock quantity cannot be negative.",
            ));
        }

        i32::try_from(value).map(Self).map_err(|e| {
            AppError::invalid_field(FIELD, "Stock quantity is too large.").with_source(e)
        })
    }

    /// Create from database value (the column has a CHECK >= 0)
    pub fn from_db(value: i32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

impl std::fmt::Display for Stock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(Stock::parse(" 12 ").unwrap().value(), 12);
        assert_eq!(Stock::parse("0").unwrap().value(), 0);
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            Stock::parse("").unwrap_err().message(),
            "Stock quantity is required."
        );
        assert_eq!(
            Stock::parse("-1").unwrap_err().message(),
            "Stock quantity cannot be negative."
        );
        assert_eq!(
            Stock::parse("1.5").unwrap_err().message(),
            "Stock quantity must be a whole number."
        );
        assert!(Stock::parse("99999999999").is_err());
    }
}
