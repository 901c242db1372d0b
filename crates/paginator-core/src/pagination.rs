//! Display metadata for paginated list controls.
//!
//! Provides the single public computation [`paginate`] plus the small page
//! math it is built from. Everything here is pure; rendering and data
//! fetching stay with the caller.

use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_PAGE_SIZE;
use crate::options::PaginationOptions;
use crate::page_item::PageItem;
use crate::window::build_pages;

/// Everything a UI layer needs to render a paginator control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    /// Total item count, echoed from the options.
    pub total: i64,
    /// Resolved current page (1-based).
    pub current: i64,
    /// Total number of pages.
    pub page_count: i64,
    /// Condensed page sequence in display order.
    pub pages: Vec<PageItem>,
    /// Next page, or `None` on the last page.
    pub next: Option<i64>,
    /// Previous page, or `None` on the first page.
    pub previous: Option<i64>,
    /// First item index shown on the current page (1-based, inclusive).
    pub showing_start: i64,
    /// Last item index shown on the current page (1-based, inclusive).
    pub showing_end: i64,
}

/// Compute the display metadata for one page of a list.
///
/// Never fails and never panics: degenerate inputs (a zero total, a
/// current page outside `[1, page_count]`, a tiny window limit) flow
/// through the arithmetic unvalidated. Use [`paginate_clamped`] when the
/// current page cannot be trusted to stay in range.
pub fn paginate(options: &PaginationOptions) -> PageInfo {
    let total = options.total;
    let current = options.effective_current();
    let page_size = options.effective_page_size();

    let page_count = ceil_div(total, page_size);
    let pages = build_pages(page_count, options.page_limit, current);

    let next = if current < page_count {
        Some(current + 1)
    } else {
        None
    };
    let previous = if current > 1 { Some(current - 1) } else { None };

    let showing_start = current * page_size - page_size + 1;
    let showing_end = if total < page_size || current == page_count {
        total
    } else {
        current * page_size
    };

    tracing::trace!(
        "paginated {} items into {} pages, {} entries shown for page {}",
        total,
        page_count,
        pages.len(),
        current
    );

    PageInfo {
        total,
        current,
        page_count,
        pages,
        next,
        previous,
        showing_start,
        showing_end,
    }
}

/// Hardened variant of [`paginate`]: clamps the current page into
/// `[1, page_count]` first, so stale navigation state cannot produce an
/// ill-formed window.
pub fn paginate_clamped(options: &PaginationOptions) -> PageInfo {
    let total_pages = page_count(options.total, options.effective_page_size());
    let current = clamp_current(options.effective_current(), total_pages);
    paginate(&options.clone().with_current(current))
}

/// Number of pages needed for `total` items at `page_size` per page.
/// A zero `page_size` falls back to the default.
pub fn page_count(total: i64, page_size: i64) -> i64 {
    let page_size = if page_size == 0 {
        DEFAULT_PAGE_SIZE
    } else {
        page_size
    };
    ceil_div(total, page_size)
}

/// Clamp a requested page into a valid range.
pub fn clamp_current(page: i64, page_count: i64) -> i64 {
    page.clamp(1, page_count.max(1))
}

/// Ceiling division matching `ceil` of the real quotient for any sign of
/// either operand.
fn ceil_div(a: i64, b: i64) -> i64 {
    let quotient = a / b;
    let remainder = a % b;
    if remainder != 0 && (remainder > 0) == (b > 0) {
        quotient + 1
    } else {
        quotient
    }
}
