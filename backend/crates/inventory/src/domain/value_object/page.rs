//! Page Number Value Object

/// A 1-indexed listing page
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PageNumber(u32);

impl PageNumber {
    pub const FIRST: PageNumber = PageNumber(1);

    /// Parse the `page` query parameter
    ///
    /// Absent, unparsable, and values below 1 all mean the first page.
    pub fn parse(raw: Option<&str>) -> Self {
        raw.and_then(|raw| raw.trim().parse::<u32>().ok())
            .map(Self::new)
            .unwrap_or(Self::FIRST)
    }

    pub fn new(page: u32) -> Self {
        Self(page.max(1))
    }

    pub fn get(&self) -> u32 {
        self.0
    }

    /// Number of records before this page
    pub fn offset(&self, page_size: u32) -> u64 {
        u64::from(self.0 - 1) * u64::from(page_size)
    }
}

impl Default for PageNumber {
    fn default() -> Self {
        Self::FIRST
    }
}

/// Pages needed to show `total` records, `ceil(total / page_size)`
pub fn page_count(total: u64, page_size: u32) -> u64 {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(u64::from(page_size))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(PageNumber::parse(Some("3")).get(), 3);
        assert_eq!(PageNumber::parse(Some("0")).get(), 1);
        assert_eq!(PageNumber::parse(Some("-2")).get(), 1);
        assert_eq!(PageNumber::parse(Some("abc")).get(), 1);
        assert_eq!(PageNumber::parse(None).get(), 1);
    }

    #[test]
    fn test_offset() {
        assert_eq!(PageNumber::new(1).offset(12), 0);
        assert_eq!(PageNumber::new(3).offset(12), 24);
    }

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(0, 12), 0);
        assert_eq!(page_count(12, 12), 1);
        assert_eq!(page_count(25, 12), 3);
    }
}
