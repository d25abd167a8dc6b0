//! Product Name Value Object
//!
//! Uniqueness is case-insensitive, so [`ProductName::folded`] is the key the
//! stores compare on.

use kernel::error::app_error::AppResult;

use super::label;

/// A trimmed product name, 2 to 100 characters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductName(String);

impl ProductName {
    pub fn new(raw: impl AsRef<str>) -> AppResult<Self> {
        label::normalize(raw.as_ref(), "name", "Product name").map(Self)
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lowercased form used for uniqueness comparisons
    pub fn folded(&self) -> String {
        self.0.to_lowercase()
    }

    pub fn eq_ignore_case(&self, other: &ProductName) -> bool {
        self.folded() == other.folded()
    }
}

impl std::fmt::Display for ProductName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
