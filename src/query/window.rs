//! Page windows
//!
//! One pagination policy shared by plain listing and criteria queries.

/// Limit used when the caller asks for less than one item per page
pub const DEFAULT_LIMIT: usize = 10;

/// A normalized `(page, limit)` pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    page: usize,
    limit: usize,
}

impl Window {
    /// Normalize raw request values
    ///
    /// `page < 1` becomes 1 and `limit < 1` becomes [`DEFAULT_LIMIT`].
    pub fn new(page: i64, limit: i64) -> Self {
        let page = usize::try_from(page).ok().filter(|p| *p >= 1).unwrap_or(1);
        let limit = usize::try_from(limit)
            .ok()
            .filter(|l| *l >= 1)
            .unwrap_or(DEFAULT_LIMIT);
        Self { page, limit }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Zero-based offset of the first element (saturating)
    pub fn offset(&self) -> usize {
        (self.page - 1).saturating_mul(self.limit)
    }

    /// Cut this window out of `items`
    ///
    /// Out-of-range windows are empty; a window running past the end is
    /// truncated.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = self.offset();
        if start >= items.len() {
            return &[];
        }
        let end = start.saturating_add(self.limit).min(items.len());
        &items[start..end]
    }
}

impl Default for Window {
    fn default() -> Self {
        Self::new(1, DEFAULT_LIMIT as i64)
    }
}
