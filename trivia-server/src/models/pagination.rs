//! Pagination helper
//!
//! Pages are fixed 10-item windows over an ordered result set, selected
//! by a 1-indexed page number. Out-of-range pages are empty, not errors.

use serde::Deserialize;

/// Items per page
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Requested page (1-indexed)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub number: i64,
}

impl Page {
    pub const FIRST: Page = Page { number: 1 };

    pub fn new(number: i64) -> Self {
        Self { number }
    }

    /// Start index of this page, or `None` for pages below 1.
    pub fn offset(&self) -> Option<usize> {
        let index = usize::try_from(self.number.checked_sub(1)?).ok()?;
        index.checked_mul(QUESTIONS_PER_PAGE)
    }

    /// Slice `items` down to this page.
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
        Self::FIRST
    }
}

/// Query parameters for pagination.
///
/// `page` is kept as a string so that a non-numeric value falls back to
/// page 1 instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<String>,
}

impl From<PageParams> for Page {
    fn from(params: PageParams) -> Self {
        params
            .page
            .as_deref()
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .map(Page::new)
            .unwrap_or_default()
    }
}

/// Return the formatted items for `page`, cloned out of `items`.
pub fn paginate<T: Clone>(page: Page, items: &[T]) -> Vec<T> {
    page.slice(items).to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(page: Option<&str>) -> PageParams {
        PageParams {
            page: page.map(str::to_owned),
        }
    }

    #[test]
    fn page_size_law() {
        for n in [0usize, 1, 9, 10, 11, 15, 20, 35] {
            let items: Vec<usize> = (0..n).collect();
            for p in 1..=5i64 {
                let page = paginate(Page::new(p), &items);
                let skipped = 10 * (p as usize - 1);
                let expected = n.saturating_sub(skipped).min(10);
                assert_eq!(page.len(), expected, "n={n} p={p}");
                if let Some(first) = page.first() {
                    assert_eq!(*first, skipped);
                    assert!(page.windows(2).all(|w| w[1] == w[0] + 1));
                }
            }
        }
    }

    #[test]
    fn second_page_of_fifteen() {
        let items: Vec<u32> = (1..=15).collect();
        assert_eq!(paginate(Page::new(2), &items), (11..=15).collect::<Vec<_>>());
    }

    #[test]
    fn out_of_range_is_empty() {
        let items: Vec<u32> = (1..=20).collect();
        assert!(paginate(Page::new(3), &items).is_empty());
    }

    #[test]
    fn pages_below_one_are_empty() {
        let items: Vec<u32> = (1..=20).collect();
        assert!(paginate(Page::new(0), &items).is_empty());
        assert!(paginate(Page::new(-1), &items).is_empty());
    }

    #[test]
    fn absent_or_garbage_page_is_first() {
        assert_eq!(Page::from(params(None)), Page::FIRST);
        assert_eq!(Page::from(params(Some("abc"))), Page::FIRST);
        assert_eq!(Page::from(params(Some(""))), Page::FIRST);
        assert_eq!(Page::from(params(Some(" 2 "))), Page::new(2));
    }

    #[test]
    fn huge_page_does_not_overflow() {
        let items: Vec<u32> = (1..=5).collect();
        assert!(paginate(Page::new(i64::MAX), &items).is_empty());
    }
}
