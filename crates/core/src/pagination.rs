//! Fixed-size, 1-indexed page windows over an ordered sequence.

/// Number of questions shown per page unless configured otherwise.
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Window `[(page-1)*page_size, page*page_size)` over an ordered collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    page: u32,
    page_size: usize,
}

impl PageWindow {
    #[must_use]
    pub fn new(page: u32, page_size: usize) -> Self {
        Self { page, page_size }
    }

    #[must_use]
    pub fn page(&self) -> u32 {
        self.page
    }

    #[must_use]
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Zero-based index of the first item on this page.
    ///
    /// Page 0 has no valid start and returns `None`.
    #[must_use]
    pub fn start(&self) -> Option<usize> {
        let index = usize::try_from(self.page.checked_sub(1)?).ok()?;
        Some(index.saturating_mul(self.page_size))
    }

    /// Exclusive end index of this page.
    #[must_use]
    pub fn end(&self) -> Option<usize> {
        self.start().map(|start| start.saturating_add(self.page_size))
    }

    /// Items of `items` that fall inside this window.
    ///
    /// Returns an empty slice when the window starts at or past the end.
    #[must_use]
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        match (self.start(), self.end()) {
            (Some(start), Some(end)) if start < items.len() => &items[start..end.min(items.len())],
            _ => &[],
        }
    }
}

/// Copy out the items for a 1-based `page`.
#[must_use]
pub fn paginate<T: Clone>(items: &[T], page: u32, page_size: usize) -> Vec<T> {
    PageWindow::new(page, page_size).slice(items).to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(n: usize) -> Vec<usize> {
        (0..n).collect()
    }

    #[test]
    fn first_page_covers_leading_items() {
        assert_eq!(paginate(&items(25), 1, 10), (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn last_page_is_partial() {
        assert_eq!(paginate(&items(25), 3, 10), vec![20, 21, 22, 23, 24]);
    }

    #[test]
    fn page_beyond_range_is_empty() {
        let all = items(25);
        for page in [4, 100, 9999, u32::MAX] {
            assert!(paginate(&all, page, QUESTIONS_PER_PAGE).is_empty(), "page {page}");
        }
    }

    #[test]
    fn page_zero_is_empty() {
        assert!(paginate(&items(5), 0, 10).is_empty());
        assert_eq!(PageWindow::new(0, 10).start(), None);
    }

    #[test]
    fn exact_multiple_has_no_trailing_page() {
        let all = items(20);
        assert_eq!(paginate(&all, 2, 10).len(), 10);
        assert!(paginate(&all, 3, 10).is_empty());
    }

    #[test]
    fn window_bounds() {
        let w = PageWindow::new(3, 10);
        assert_eq!(w.start(), Some(20));
        assert_eq!(w.end(), Some(30));
    }
}
