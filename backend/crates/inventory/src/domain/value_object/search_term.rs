//! Search Term Value Object

/// A search term reduced to ASCII letters, digits and spaces
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchTerm(String);

impl SearchTerm {
    /// Strip every character outside `[A-Za-z0-9 ]`
    pub fn sanitize(raw: &str) -> Self {
        Self(
            raw.chars()
                .filter(|c| c.is_ascii_alphanumeric() || *c == ' ')
                .collect(),
        )
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Case-insensitive substring match; an empty term matches everything
    pub fn matches(&self, haystack: &str) -> bool {
        haystack
            .to_lowercase()
            .contains(&self.0.to_ascii_lowercase())
    }

    /// `ILIKE` pattern; the sanitized term holds no wildcard characters
    pub fn like_pattern(&self) -> String {
        format!("%{}%", self.0)
    }
}

impl std::fmt::Display for SearchTerm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize() {
        assert_eq!(SearchTerm::sanitize("wid*get").as_str(), "widget");
        assert_eq!(SearchTerm::sanitize("blue widget!").as_str(), "blue widget");
        assert!(SearchTerm::sanitize("###").is_empty());
        assert!(SearchTerm::sanitize("%_").is_empty());
    }

    #[test]
    fn test_matches() {
        let term = SearchTerm::sanitize("WID");
        assert!(term.matches("Blue widget"));
        assert!(!term.matches("Gadget"));
        assert!(SearchTerm::default().matches("anything"));
        assert_eq!(term.like_pattern(), "%WID%");
    }
}
