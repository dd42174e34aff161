//! Fixed-size page windows for the trivia question listings.
//!
//! A page `p` covers items `[(p - 1) * size, p * size)`. Pages past the end
//! simply select nothing; pages below 1 select nothing as well instead of
//! wrapping around.

use serde::Serialize;

/// Questions returned per page.
pub const QUESTIONS_PER_PAGE: i64 = 10;

/// Page used when the client omits `?page=` or sends something unparsable.
pub const DEFAULT_PAGE: i64 = 1;

/// LIMIT/OFFSET pair for one requested page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageWindow {
    pub page: i64,
    pub limit: i64,
    pub offset: i64,
}

impl PageWindow {
    pub fn new(page: i64, size: i64) -> Self {
        if page < 1 || size < 1 {
            return Self {
                page,
                limit: 0,
                offset: 0,
            };
        }
        Self {
            page,
            limit: size,
            offset: (page - 1).saturating_mul(size),
        }
    }

    /// Build a window from the raw `page` query value.
    ///
    /// Missing or non-numeric input falls back to [`DEFAULT_PAGE`].
    pub fn from_query(raw: Option<&str>, size: i64) -> Self {
        let page = raw
            .and_then(|s| s.trim().parse::<i64>().ok())
            .unwrap_or(DEFAULT_PAGE);
        Self::new(page, size)
    }

    /// Trivia listing window for the given raw page value.
    pub fn questions(raw: Option<&str>) -> Self {
        Self::from_query(raw, QUESTIONS_PER_PAGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_count(total: i64, size: i64) -> i64 {
        if total <= 0 || size <= 0 {
            return 0;
        }
        (total + size - 1) / size
    }

    #[test]
    fn first_page_starts_at_zero() {
        let w = PageWindow::new(1, 10);
        assert_eq!((w.limit, w.offset), (10, 0));
    }

    #[test]
    fn third_page_skips_twenty() {
        let w = PageWindow::new(3, 10);
        assert_eq!((w.limit, w.offset), (10, 20));
    }

    #[test]
    fn page_zero_and_negative_select_nothing() {
        assert_eq!(PageWindow::new(0, 10).limit, 0);
        assert_eq!(PageWindow::new(-4, 10).limit, 0);
        assert_eq!(PageWindow::new(-4, 10).offset, 0);
    }

    #[test]
    fn missing_or_garbage_page_defaults_to_one() {
        assert_eq!(PageWindow::questions(None).page, 1);
        assert_eq!(PageWindow::questions(Some("abc")).page, 1);
        assert_eq!(PageWindow::questions(Some(" 2 ")).offset, 10);
    }

    #[test]
    fn huge_page_does_not_overflow() {
        let w = PageWindow::new(i64::MAX, 10);
        assert_eq!(w.offset, i64::MAX);
    }

    #[test]
    fn windows_tile_the_whole_range() {
        let items: Vec<i64> = (0..37).collect();
        let total = items.len() as i64;
        let mut rebuilt = Vec::new();
        for page in 1..=page_count(total, QUESTIONS_PER_PAGE) {
            let w = PageWindow::new(page, QUESTIONS_PER_PAGE);
            let start = (w.offset as usize).min(items.len());
            let end = (start + w.limit as usize).min(items.len());
            assert!(end - start <= QUESTIONS_PER_PAGE as usize);
            rebuilt.extend_from_slice(&items[start..end]);
        }
        assert_eq!(rebuilt, items);
    }

    #[test]
    fn page_count_rounds_up() {
        assert_eq!(page_count(0, 10), 0);
        assert_eq!(page_count(10, 10), 1);
        assert_eq!(page_count(11, 10), 2);
    }
}
