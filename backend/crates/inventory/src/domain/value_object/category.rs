//! Category Value Object

use kernel::error::app_error::AppResult;

use super::label;

/// A trimmed category label, 2 to 100 characters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category(String);

impl Category {
    pub fn new(raw: impl AsRef<str>) -> AppResult<Self> {
        label::normalize(raw.as_ref(), "category", "Category").map(Self)
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(category: impl Into<String>) -> Self {
        Self(category.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
