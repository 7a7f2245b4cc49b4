pub const QUESTIONS_PER_PAGE: i64 = 10;

/// A 1-based page of questions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    number: i64,
}

impl Page {
    /// Pages below 1 are clamped to the first page.
    pub fn new(number: i64) -> Self {
        Self {
            number: number.max(1),
        }
    }

    /// Parses a raw `page` query value. Anything missing or non-numeric is
    /// the first page.
    pub fn parse(raw: Option<&str>) -> Self {
        let number = raw.and_then(|s| s.trim().parse().ok()).unwrap_or(1);
        Self::new(number)
    }

    /// Reads the first `page` pair of a decoded query string. Repeated
    /// `page` keys after the first are ignored.
    pub fn from_query(pairs: &[(String, String)]) -> Self {
        let raw = pairs
            .iter()
            .find(|(key, _)| key == "page")
            .map(|(_, value)| value.as_str());
        Self::parse(raw)
    }

    pub fn number(&self) -> i64 {
        self.number
    }

    pub fn offset(&self) -> i64 {
        (self.number - 1).saturating_mul(QUESTIONS_PER_PAGE)
    }

    pub fn limit(&self) -> i64 {
        QUESTIONS_PER_PAGE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_page_starts_at_zero() {
        let page = Page::new(1);
        assert_eq!(page.offset(), 0);
        assert_eq!(page.limit(), 10);
    }

    #[test]
    fn offset_advances_by_page_size() {
        assert_eq!(Page::new(2).offset(), 10);
        assert_eq!(Page::new(3).offset(), 20);
    }

    #[test]
    fn pages_below_one_are_clamped() {
        assert_eq!(Page::new(0), Page::new(1));
        assert_eq!(Page::new(-5).offset(), 0);
    }

    #[test]
    fn parse_falls_back_to_first_page() {
        assert_eq!(Page::parse(None).number(), 1);
        assert_eq!(Page::parse(Some("abc")).number(), 1);
        assert_eq!(Page::parse(Some("")).number(), 1);
        assert_eq!(Page::parse(Some("4")).number(), 4);
    }

    #[test]
    fn from_query_takes_first_page_pair() {
        let pairs = vec![
            ("sort".to_string(), "id".to_string()),
            ("page".to_string(), "2".to_string()),
            ("page".to_string(), "3".to_string()),
        ];
        assert_eq!(Page::from_query(&pairs).number(), 2);
        assert_eq!(Page::from_query(&[]).number(), 1);
    }

    #[test]
    fn huge_page_does_not_overflow() {
        let page = Page::new(i64::MAX);
        assert_eq!(page.offset(), i64::MAX);
    }
}
