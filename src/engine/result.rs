//! Result page produced by a query run

use serde::Serialize;

/// The visible page of a query plus pagination metadata
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultPage<'a, R> {
    /// Records of the current page, in result order
    pub items: Vec<&'a R>,
    /// Records matching the filters, before pagination
    pub total_matched: usize,
    /// Total pages at this page size, at least 1
    pub total_pages: usize,
    /// Clamped page index actually used
    pub page_index: usize,
    pub page_size: usize,
}

impl<'a, R> ResultPage<'a, R> {
    /// Returns true if the page holds no records
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of records on the page
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns an iterator over the page's records
    pub fn iter(&self) -> impl Iterator<Item = &'a R> + '_ {
        self.items.iter().copied()
    }

    /// Returns true if a previous page exists
    pub fn has_previous(&self) -> bool {
        self.page_index > 1
    }

    /// Returns true if a next page exists
    pub fn has_next(&self) -> bool {
        self.page_index < self.total_pages
    }
}
