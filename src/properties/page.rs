//! Pagination Module
//!
//! Slices a filtered collection into pages and builds the listing
//! envelope. Page tokens are forgiving: a token that is not a positive
//! integer falls back to page 1, and a page beyond the end clamps to
//! the last page. A collection always has at least one page, so an
//! empty result is page 1 of 1 with no items.

use serde::Serialize;

// == Public Constants ==
/// Page size used when `per_page` is absent or non-numeric.
pub const DEFAULT_PER_PAGE: u32 = 10;

/// Smallest accepted page size.
pub const MIN_PER_PAGE: u32 = 1;

/// Largest accepted page size.
pub const MAX_PER_PAGE: u32 = 100;

// == Page Parameters ==
/// Requested page coordinates after parsing and clamping. The page
/// number is still the raw request here; clamping against the last
/// page happens in [`paginate`] once the collection size is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageParams {
    pub page: u64,
    pub per_page: u32,
}

impl PageParams {
    /// Parses raw `page` and `per_page` query values.
    pub fn from_raw(page: Option<&str>, per_page: Option<&str>) -> Self {
        Self {
            page: page_from_raw(page),
            per_page: per_page_from_raw(per_page),
        }
    }
}

/// Parses a raw page token. Anything that is not a positive integer
/// falls back to page 1.
pub fn page_from_raw(raw: Option<&str>) -> u64 {
    match raw.map(str::trim).filter(|s| !s.is_empty()).map(str::parse::<u64>) {
        Some(Ok(page)) if page >= 1 => page,
        _ => 1,
    }
}

/// Parses a raw page size. Non-numeric input falls back to the
/// default; numeric input is clamped into [MIN_PER_PAGE, MAX_PER_PAGE].
pub fn per_page_from_raw(raw: Option<&str>) -> u32 {
    match raw.map(str::trim).filter(|s| !s.is_empty()).map(str::parse::<i64>) {
        Some(Ok(value)) => value.clamp(MIN_PER_PAGE as i64, MAX_PER_PAGE as i64) as u32,
        _ => DEFAULT_PER_PAGE,
    }
}

// == Page Envelope ==
/// One page of results plus the paging metadata clients navigate by.
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    /// Number of items in the whole filtered collection
    pub count: usize,
    /// Number of pages at this page size, at least 1
    pub total_pages: usize,
    /// The page actually served, after clamping
    pub current_page: usize,
    /// Effective page size
    pub per_page: u32,
    /// Whether a later page exists
    pub next: bool,
    /// Whether an earlier page exists
    pub previous: bool,
    /// The items on this page
    pub data: Vec<T>,
}

// == Paginate ==
/// Slices `items` into the requested page.
pub fn paginate<T: Clone>(items: &[T], params: PageParams) -> Page<T> {
    let count = items.len();
    let per_page = params.per_page as usize;
    let total_pages = count.div_ceil(per_page).max(1);
    let current_page = (params.page as usize).min(total_pages);

    let start = (current_page - 1) * per_page;
    let end = (start + per_page).min(count);
    let data = if start < count {
        items[start..end].to_vec()
    } else {
        Vec::new()
    };

    Page {
        count,
        total_pages,
        current_page,
        per_page: params.per_page,
        next: current_page < total_pages,
        previous: current_page > 1,
        data,
    }
}
