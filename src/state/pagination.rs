//! Pagination engine.
//!
//! Pure derivation of the visible slice and page-button index from
//! `(items, page size, requested page)`. Pages are 1-based; out-of-range
//! requests are clamped, never rejected.

use std::fmt;
use std::num::NonZeroUsize;

use crate::model::PaginationError;

/// Page count up to which every page gets a button.
pub const MAX_PAGES_WITHOUT_ELLIPSIS: usize = 5;

/// Validated number of items per page (at least one).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageSize(NonZeroUsize);

impl PageSize {
    /// Smart constructor: rejects zero.
    pub fn new(items_per_page: usize) -> Result<Self, PaginationError> {
        NonZeroUsize::new(items_per_page)
            .map(Self)
            .ok_or(PaginationError::InvalidPageSize(0))
    }

    /// Items per page.
    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl From<NonZeroUsize> for PageSize {
    fn from(items_per_page: NonZeroUsize) -> Self {
        Self(items_per_page)
    }
}

impl TryFrom<i64> for PageSize {
    type Error = PaginationError;

    fn try_from(items_per_page: i64) -> Result<Self, Self::Error> {
        usize::try_from(items_per_page)
            .ok()
            .and_then(NonZeroUsize::new)
            .map(Self)
            .ok_or(PaginationError::InvalidPageSize(items_per_page))
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One entry of the page-button index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageMarker {
    /// A real, 1-based page number.
    Page(usize),
    /// Elided range between page 1 and the window.
    LeadingEllipsis,
    /// Elided range between the window and the last page.
    TrailingEllipsis,
}

impl PageMarker {
    /// Page number, `None` for ellipses.
    pub fn page(self) -> Option<usize> {
        match self {
            PageMarker::Page(n) => Some(n),
            PageMarker::LeadingEllipsis | PageMarker::TrailingEllipsis => None,
        }
    }

    /// Whether this marker is an ellipsis.
    pub fn is_ellipsis(self) -> bool {
        self.page().is_none()
    }
}

impl fmt::Display for PageMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageMarker::Page(n) => write!(f, "{n}"),
            PageMarker::LeadingEllipsis | PageMarker::TrailingEllipsis => f.write_str("…"),
        }
    }
}

/// Number of pages for `item_count` items; at least one.
pub fn total_pages(item_count: usize, page_size: PageSize) -> usize {
    item_count.div_ceil(page_size.get()).max(1)
}

/// Clamp a requested page into `[1, total_pages]`.
pub fn clamp_page(requested_page: i64, total_pages: usize) -> usize {
    let last = i64::try_from(total_pages.max(1)).unwrap_or(i64::MAX);
    // Clamped into [1, last], which always fits in usize.
    requested_page.clamp(1, last) as usize
}

/// Page-button index for navigation UI.
///
/// Up to [`MAX_PAGES_WITHOUT_ELLIPSIS`] pages, every page is listed. Beyond
/// that, page 1 and the last page are always present, with a three-page
/// window around `current_page` kept inside `[2, total_pages - 1]` and an
/// ellipsis on each side where pages are elided.
///
/// ```
/// # use dashnav::state::pagination::{page_numbers, PageMarker::*};
/// assert_eq!(
///     page_numbers(10, 6),
///     vec![Page(1), LeadingEllipsis, Page(5), Page(6), Page(7), TrailingEllipsis, Page(10)]
/// );
/// ```
pub fn page_numbers(total_pages: usize, current_page: usize) -> Vec<PageMarker> {
    let total_pages = total_pages.max(1);

    if total_pages <= MAX_PAGES_WITHOUT_ELLIPSIS {
        return (1..=total_pages).map(PageMarker::Page).collect();
    }

    let current_page = current_page.clamp(1, total_pages);
    let window_start = current_page.saturating_sub(1).clamp(2, total_pages - 3);
    let window_end = window_start + 2;

    let mut markers = Vec::with_capacity(7);
    markers.push(PageMarker::Page(1));
    if window_start > 2 {
        markers.push(PageMarker::LeadingEllipsis);
    }
    markers.extend((window_start..=window_end).map(PageMarker::Page));
    if window_end < total_pages - 1 {
        markers.push(PageMarker::TrailingEllipsis);
    }
    markers.push(PageMarker::Page(total_pages));
    markers
}

/// Derived view of one page of `items`.
///
/// # Invariant
/// `1 <= current_page <= total_pages` and `total_pages >= 1`.
#[derive(Debug)]
pub struct PaginationState<'a, T> {
    items: &'a [T],
    page_size: PageSize,
    current_page: usize,
    total_pages: usize,
    page_numbers: Vec<PageMarker>,
}

/// Paginate `items`, clamping `requested_page` into range.
pub fn paginate<T>(items: &[T], page_size: PageSize, requested_page: i64) -> PaginationState<'_, T> {
    let total_pages = total_pages(items.len(), page_size);
    let current_page = clamp_page(requested_page, total_pages);

    PaginationState {
        items,
        page_size,
        current_page,
        total_pages,
        page_numbers: page_numbers(total_pages, current_page),
    }
}

impl<'a, T> PaginationState<'a, T> {
    /// Clamped 1-based current page.
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Total pages, at least one.
    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// Items per page.
    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    /// Number of items across all pages.
    pub fn total_items(&self) -> usize {
        self.items.len()
    }

    /// Items on the current page; shorter on the last page, empty for no items.
    pub fn current_items(&self) -> &'a [T] {
        let start = (self.current_page - 1) * self.page_size.get();
        let end = start.saturating_add(self.page_size.get());
        let start = start.min(self.items.len());
        let end = end.min(self.items.len());
        &self.items[start..end]
    }

    /// Page-button index for the current page.
    pub fn page_numbers(&self) -> &[PageMarker] {
        &self.page_numbers
    }

    /// 1-based inclusive item positions shown ("11-15 of 23"), `None` when empty.
    pub fn item_range(&self) -> Option<(usize, usize)> {
        let shown = self.current_items().len();
        if shown == 0 {
            return None;
        }
        let first = (self.current_page - 1) * self.page_size.get() + 1;
        Some((first, first + shown - 1))
    }

    /// Whether a later page exists.
    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Whether an earlier page exists.
    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    /// State for page `page`, clamped.
    pub fn go_to_page(&self, page: i64) -> Self {
        paginate(self.items, self.page_size, page)
    }

    /// State for the next page; same page at the end.
    pub fn next_page(&self) -> Self {
        self.go_to_page(self.current_page_i64().saturating_add(1))
    }

    /// State for the previous page; same page at the start.
    pub fn prev_page(&self) -> Self {
        self.go_to_page(self.current_page_i64().saturating_sub(1))
    }

    fn current_page_i64(&self) -> i64 {
        i64::try_from(self.current_page).unwrap_or(i64::MAX)
    }
}

#[cfg(test)]
#[path = "pagination_tests.rs"]
mod tests;
