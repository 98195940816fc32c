//! Pagination for list queries.

/// Page size used when the caller does not supply one.
pub const DEFAULT_LIMIT: u32 = 10;
/// Largest page size a caller may request.
pub const MAX_LIMIT: u32 = 100;

/// 1-indexed page/limit pagination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl Pagination {
    /// Zero values fall back to the defaults; `limit` is capped at [`MAX_LIMIT`].
    pub fn new(page: Option<u32>, limit: Option<u32>) -> Self {
        Self {
            page: page.filter(|p| *p > 0).unwrap_or(1),
            limit: limit
                .filter(|l| *l > 0)
                .unwrap_or(DEFAULT_LIMIT)
                .min(MAX_LIMIT),
        }
    }

    pub fn offset(&self) -> usize {
        (self.page as usize - 1).saturating_mul(self.limit as usize)
    }

    /// Slice an already-filtered result set into a page.
    pub fn apply<T>(&self, matching: Vec<T>) -> Page<T> {
        let total = matching.len();
        let offset = self.offset();
        let items: Vec<T> = matching
            .into_iter()
            .skip(offset)
            .take(self.limit as usize)
            .collect();
        Page { items, total }
    }
}

/// One page of a list query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Number of records matching the filter, across all pages.
    pub total: usize,
}
