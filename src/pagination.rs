//! Fixed-size pagination windows over ordered collections.

pub const QUESTIONS_PER_PAGE: usize = 10;

/// One-based page number as requested by a client.
///
/// Pages below 1 are accepted but select nothing, the same as a page past the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page(i64);

impl Default for Page {
    fn default() -> Self {
        Self(1)
    }
}

impl Page {
    pub fn new(number: i64) -> Self {
        Self(number)
    }

    pub fn number(self) -> i64 {
        self.0
    }

    fn offset(self) -> Option<usize> {
        if self.0 < 1 {
            return None;
        }
        usize::try_from(self.0 - 1)
            .ok()?
            .checked_mul(QUESTIONS_PER_PAGE)
    }

    /// Selects the items visible on this page, keeping their order.
    pub fn window<T>(self, items: Vec<T>) -> Vec<T> {
        match self.offset() {
            Some(start) => items
                .into_iter()
                .skip(start)
                .take(QUESTIONS_PER_PAGE)
                .collect(),
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expected_len(total: usize, page: i64) -> usize {
        let start = (page as usize - 1) * QUESTIONS_PER_PAGE;
        total.saturating_sub(start).min(QUESTIONS_PER_PAGE)
    }

    #[test]
    fn window_length_matches_remaining_items() {
        for total in [0, 1, 9, 10, 11, 19, 20, 21, 35] {
            for page in 1..=5 {
                let items: Vec<usize> = (0..total).collect();
                assert_eq!(
                    Page::new(page).window(items).len(),
                    expected_len(total, page),
                    "total={total} page={page}"
                );
            }
        }
    }

    #[test]
    fn window_starts_at_page_offset() {
        let items: Vec<usize> = (0..25).collect();
        assert_eq!(Page::new(3).window(items), vec![20, 21, 22, 23, 24]);
    }

    #[test]
    fn first_page_is_default() {
        let items: Vec<usize> = (0..12).collect();
        assert_eq!(Page::default().window(items), (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn non_positive_pages_are_empty() {
        assert!(Page::new(0).window(vec![1, 2, 3]).is_empty());
        assert!(Page::new(-4).window(vec![1, 2, 3]).is_empty());
    }

    #[test]
    fn huge_page_does_not_overflow() {
        assert!(Page::new(i64::MAX).window(vec![1, 2, 3]).is_empty());
    }
}
