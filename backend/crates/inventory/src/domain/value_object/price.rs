//! Price Value Object
//!
//! Stored as `NUMERIC(12,2)`, so at most two fractional digits and ten
//! integer digits.

use std::str::FromStr;

use kernel::error::app_error::{AppError, AppResult};
use rust_decimal::Decimal;

const FIELD: &str = "price";
const MAX_SCALE: u32 = 2;

/// Unit price; never negative
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Price(Decimal);

impl Price {
    /// Parse the `price` form field
    pub fn parse(raw: &str) -> AppResult<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(AppError::invalid_field(FIELD, "Price is required."));
        }

        let value = Decimal::from_str(raw).map_err(|e| {
            AppError::invalid_field(FIELD, "Price must be a number.").with_source(e)
        })?;

        Self::new(value)
    }

    pub fn new(value: Decimal) -> AppResult<Self> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(AppError::invalid_field(FIELD, "Price cannot be negative."));
        }

        let value = value.normalize();
        if value.scale() > MAX_SCALE {
            return Err(AppError::invalid_field(
                FIELD,
                "Prices are stored in cents, so at most 2 decimal places are allowed.",
            ));
        }

        if value > Self::max() {
            return Err(AppError::invalid_field(FIELD, "Price is too large."));
        }

        Ok(Self(value))
    }

    /// Create from database value (the column has a CHECK >= 0)
    pub fn from_db(value: Decimal) -> Self {
        Self(value)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    fn max() -> Decimal {
        Decimal::new(999_999_999_999, MAX_SCALE)
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}
