//! Page-window condensation.
//!
//! Collapses a page range that exceeds the display limit into a short
//! sequence of page numbers and ellipsis markers. Near either boundary a
//! fixed window stays anchored to that side; in the middle, a five-page
//! window around the current page is framed by both outer ranges.

use crate::page_item::PageItem;

/// Build the ordered page sequence for a paginator control.
///
/// With no `page_limit`, or when the full range fits within it, the result
/// is the complete ascending sequence (empty when `page_count` is zero).
///
/// Total over all inputs: an out-of-range `current` or a limit below 8
/// still produces a sequence, just not necessarily a well-formed one.
pub fn build_pages(page_count: i64, page_limit: Option<i64>, current: i64) -> Vec<PageItem> {
    let mut pages = Vec::new();

    let limit = match page_limit {
        Some(limit) if page_count > limit => limit,
        _ => {
            push_page_range(&mut pages, 1, page_count);
            return pages;
        }
    };

    let threshold = ceil_half(limit);

    if current - 1 <= threshold {
        push_page_range(&mut pages, 1, limit - 3);
        pages.push(PageItem::Ellipsis);
        push_page_range(&mut pages, page_count - 1, page_count);
        return pages;
    }

    if current + 1 > page_count - threshold {
        push_page_range(&mut pages, 1, 2);
        pages.push(PageItem::Ellipsis);
        push_page_range(&mut pages, page_count - (threshold + 1), page_count);
        return pages;
    }

    if current > threshold && current <= page_count - threshold {
        push_page_range(&mut pages, 1, start_max(current, page_count, limit));
        pages.push(PageItem::Ellipsis);
        push_page_range(&mut pages, current - 2, current + 2);
        pages.push(PageItem::Ellipsis);
        push_page_range(&mut pages, end_min(current, page_count, limit), page_count);
        return pages;
    }

    if current > page_count - threshold {
        push_page_range(&mut pages, 1, 2);
        pages.push(PageItem::Ellipsis);
        push_page_range(&mut pages, page_count - (threshold + 1), page_count);
        return pages;
    }

    pages
}

/// Append every page in `[start, end]` in ascending order. Appends nothing
/// when `start > end`. Ellipses are never produced here; callers insert
/// them between ranges.
fn push_page_range(pages: &mut Vec<PageItem>, start: i64, end: i64) {
    if start > end {
        return;
    }
    for page in start..=end {
        pages.push(PageItem::Number(page));
    }
}

/// End of the leading range in the middle region. The rounding direction
/// flips at the midpoint so neither direction of travel systematically
/// over- or under-fills the window.
fn start_max(current: i64, page_count: i64, limit: i64) -> i64 {
    let max = limit - 7;
    if 2 * current < page_count {
        floor_half(max)
    } else {
        ceil_half(max)
    }
}

/// Start of the trailing range in the middle region, mirroring
/// [`start_max`].
fn end_min(current: i64, page_count: i64, limit: i64) -> i64 {
    let min = limit - 7;
    page_count + 1
        - if 2 * current > page_count {
            floor_half(min)
        } else {
            ceil_half(min)
        }
}

fn floor_half(n: i64) -> i64 {
    n.div_euclid(2)
}

fn ceil_half(n: i64) -> i64 {
    (n + 1).div_euclid(2)
}
