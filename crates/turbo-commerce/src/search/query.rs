//! Sort, pagination and query types.

use crate::search::PageWindow;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sort key for product listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    /// Highest rated first; ignores the sort order.
    #[default]
    Featured,
    /// Unit price.
    Price,
    /// Average rating.
    Rating,
    /// Title, alphabetical.
    Title,
}

impl SortBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::Featured => "featured",
            SortBy::Price => "price",
            SortBy::Rating => "rating",
            SortBy::Title => "title",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "featured" => Some(SortBy::Featured),
            "price" => Some(SortBy::Price),
            "rating" => Some(SortBy::Rating),
            "title" => Some(SortBy::Title),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortBy::Featured => "Featured",
            SortBy::Price => "Price",
            SortBy::Rating => "Rating",
            SortBy::Title => "Name",
        }
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "asc" => Some(SortOrder::Asc),
            "desc" => Some(SortOrder::Desc),
            _ => None,
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Page and sort settings applied to the product list before display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationConfig {
    /// Zero-based page index.
    pub page: usize,
    /// Items per page, always positive.
    pub page_size: usize,
    /// Sort key.
    pub sort_by: SortBy,
    /// Sort direction.
    pub sort_order: SortOrder,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            page: 0,
            page_size: 12,
            sort_by: SortBy::Featured,
            sort_order: SortOrder::Desc,
        }
    }
}

impl PaginationConfig {
    /// Merge a partial update. Fields absent from the patch are kept; a zero
    /// page size is ignored.
    pub fn merge(&self, patch: &PaginationPatch) -> Self {
        Self {
            page: patch.page.unwrap_or(self.page),
            page_size: patch
                .page_size
                .filter(|size| *size > 0)
                .unwrap_or(self.page_size),
            sort_by: patch.sort_by.unwrap_or(self.sort_by),
            sort_order: patch.sort_order.unwrap_or(self.sort_order),
        }
    }

    /// The slice window of the current page.
    pub fn window(&self) -> PageWindow {
        PageWindow::new(self.page, self.page_size)
    }
}

/// Partial pagination update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationPatch {
    pub page: Option<usize>,
    pub page_size: Option<usize>,
    pub sort_by: Option<SortBy>,
    pub sort_order: Option<SortOrder>,
}

impl PaginationPatch {
    /// Patch only the page index.
    pub fn page(page: usize) -> Self {
        Self {
            page: Some(page),
            ..Default::default()
        }
    }

    /// Patch only the sort settings.
    pub fn sort(sort_by: SortBy, sort_order: SortOrder) -> Self {
        Self {
            sort_by: Some(sort_by),
            sort_order: Some(sort_order),
            ..Default::default()
        }
    }

    /// Set the page size.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = Some(page_size);
        self
    }
}

/// Normalise a free-text query: trimmed, inner whitespace collapsed.
pub fn normalize_query(query: &str) -> String {
    query.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PaginationConfig::default();
        assert_eq!(config.page, 0);
        assert_eq!(config.page_size, 12);
        assert_eq!(config.sort_by, SortBy::Featured);
        assert_eq!(config.sort_order, SortOrder::Desc);
    }

    #[test]
    fn test_merge_keeps_unspecified_fields() {
        let config = PaginationConfig::default().merge(&PaginationPatch::page(3));
        assert_eq!(config.page, 3);
        assert_eq!(config.page_size, 12);

        let config = config.merge(&PaginationPatch::sort(SortBy::Price, SortOrder::Asc));
        assert_eq!(config.page, 3);
        assert_eq!(config.sort_by, SortBy::Price);
        assert_eq!(config.sort_order, SortOrder::Asc);
    }

    #[test]
    fn test_merge_ignores_zero_page_size() {
        let patch = PaginationPatch::default().with_page_size(0);
        assert_eq!(PaginationConfig::default().merge(&patch).page_size, 12);
    }

    #[test]
    fn test_parse_sort() {
        assert_eq!(SortBy::parse("Price"), Some(SortBy::Price));
        assert_eq!(SortBy::parse("popularity"), None);
        assert_eq!(SortOrder::parse(" asc "), Some(SortOrder::Asc));
    }

    #[test]
    fn test_normalize_query() {
        assert_eq!(normalize_query("  laptop   stand "), "laptop stand");
        assert_eq!(normalize_query("   "), "");
    }
}
