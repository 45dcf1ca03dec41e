//! Page windows over an in-memory list.

use serde::{Deserialize, Serialize};

/// The `[page * size, page * size + size)` window of a list.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageWindow {
    /// Zero-based page index.
    pub page: usize,
    /// Items per page.
    pub page_size: usize,
}

impl PageWindow {
    pub fn new(page: usize, page_size: usize) -> Self {
        Self { page, page_size }
    }

    /// First index of the window. Saturates instead of overflowing.
    pub fn start(&self) -> usize {
        self.page.saturating_mul(self.page_size)
    }

    /// One past the last index of the window.
    pub fn end(&self) -> usize {
        self.start().saturating_add(self.page_size)
    }

    /// Slice a list; an out-of-range page yields an empty slice.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = self.start().min(items.len());
        let end = self.end().min(items.len());
        &items[start..end]
    }

    /// Number of pages needed for `total` items (at least one).
    pub fn page_count(&self, total: usize) -> usize {
        if self.page_size == 0 || total == 0 {
            return 1;
        }
        total.div_ceil(self.page_size)
    }

    /// Whether a page follows this one.
    pub fn has_next(&self, total: usize) -> bool {
        self.page + 1 < self.page_count(total)
    }

    /// Whether a page precedes this one.
    pub fn has_prev(&self) -> bool {
        self.page > 0
    }
}
