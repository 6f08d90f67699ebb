//! Pagination with index clamping
//!
//! Never fails: an out-of-range page index is clamped to the nearest valid
//! page, and an empty input still has one (empty) page.

use crate::query::PageRequest;

/// The slice of a result selected by a page request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    /// Clamped one-based page index
    pub index: usize,
    /// Page size actually used
    pub size: usize,
    /// Total pages, at least 1
    pub total_pages: usize,
    /// Start offset, inclusive
    pub start: usize,
    /// End offset, exclusive
    pub end: usize,
}

impl PageWindow {
    /// Number of items on the page
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns true if the page holds no items
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Computes page windows
pub struct Paginator;

impl Paginator {
    /// `ceil(len / size)`, minimum 1
    pub fn total_pages(len: usize, size: usize) -> usize {
        len.div_ceil(size.max(1)).max(1)
    }

    /// Clamps a requested index into `[1, total_pages]`
    pub fn clamp_index(index: i64, total_pages: usize) -> usize {
        if index < 1 {
            return 1;
        }
        usize::try_from(index).map_or(total_pages, |i| i.min(total_pages))
    }

    /// Window of a page over `len` items
    pub fn window(len: usize, page: &PageRequest) -> PageWindow {
        let size = page.size.max(1);
        let total_pages = Self::total_pages(len, size);
        let index = Self::clamp_index(page.index, total_pages);

        let start = ((index - 1) * size).min(len);
        let end = (start + size).min(len);

        PageWindow {
            index,
            size,
            total_pages,
            start,
            end,
        }
    }

    /// Keeps only the items of the requested page
    pub fn paginate<T>(mut items: Vec<T>, page: &PageRequest) -> (Vec<T>, PageWindow) {
        let window = Self::window(items.len(), page);
        items.truncate(window.end);
        items.drain(..window.start);
        (items, window)
    }
}
