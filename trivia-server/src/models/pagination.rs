//! Offset pagination over already-fetched, ordered result sets

use serde::Deserialize;

/// Items per page. Not configurable through the API.
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Requested page (1-indexed)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    number: u32,
}

impl Page {
    pub fn new(number: u32) -> Self {
        Self { number }
    }

    /// Parse the raw `page` query value.
    ///
    /// Missing, non-numeric and negative values fall back to page 1.
    /// Page 0 is kept as-is and selects nothing.
    pub fn from_query(raw: Option<&str>) -> Self {
        raw.and_then(|s| s.trim().parse::<u32>().ok())
            .map(Self::new)
            .unwrap_or_default()
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    /// Zero-based index of the first item on this page, `None` for page 0.
    pub fn offset(&self) -> Option<usize> {
        let before = self.number.checked_sub(1)? as usize;
        before.checked_mul(QUESTIONS_PER_PAGE)
    }

    /// Select this page's window `[offset, offset + 10)` clipped to `items`.
    ///
    /// Returns an empty slice when the page starts past the end.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let Some(start) = self.offset() else {
            return &[];
        };
        if start >= items.len() {
            return &[];
        }
        let end = start.saturating_add(QUESTIONS_PER_PAGE).min(items.len());
        &items[start..end]
    }
}

impl Default for Page {
    fn default() -> Self {
        Self { number: 1 }
    }
}

/// Query parameters carrying a page number
///
/// Kept as a string so an unparseable value degrades to page 1
/// instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<String>,
}

impl From<PageParams> for Page {
    fn from(params: PageParams) -> Self {
        Self::from_query(params.page.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(n: usize) -> Vec<usize> {
        (0..n).collect()
    }

    #[test]
    fn offset_calculation() {
        assert_eq!(Page::new(1).offset(), Some(0));
        assert_eq!(Page::new(2).offset(), Some(10));
        assert_eq!(Page::new(5).offset(), Some(40));
        assert_eq!(Page::new(0).offset(), None);
    }

    #[test]
    fn parses_query_value() {
        assert_eq!(Page::from_query(None).number(), 1);
        assert_eq!(Page::from_query(Some("3")).number(), 3);
        assert_eq!(Page::from_query(Some(" 2 ")).number(), 2);
        assert_eq!(Page::from_query(Some("abc")).number(), 1);
        assert_eq!(Page::from_query(Some("-4")).number(), 1);
        assert_eq!(Page::from_query(Some("")).number(), 1);
        assert_eq!(Page::from_query(Some("0")).number(), 0);
    }

    #[test]
    fn first_page_is_full() {
        let items = numbers(25);
        assert_eq!(Page::new(1).slice(&items), &items[0..10]);
    }

    #[test]
    fn last_page_is_clipped() {
        let items = numbers(25);
        assert_eq!(Page::new(3).slice(&items), &[20, 21, 22, 23, 24]);
    }

    #[test]
    fn page_past_the_end_is_empty() {
        let items = numbers(25);
        assert!(Page::new(4).slice(&items).is_empty());
        assert!(Page::new(1000).slice(&items).is_empty());
        assert!(Page::new(u32::MAX).slice(&items).is_empty());
    }

    #[test]
    fn page_zero_is_empty() {
        let items = numbers(5);
        assert!(Page::new(0).slice(&items).is_empty());
    }

    #[test]
    fn empty_input_gives_empty_page() {
        let items: Vec<usize> = Vec::new();
        assert!(Page::default().slice(&items).is_empty());
    }

    #[test]
    fn params_fall_back_to_first_page() {
        let page = Page::from(PageParams {
            page: Some("two".into()),
        });
        assert_eq!(page, Page::default());
    }
}
