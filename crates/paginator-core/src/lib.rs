//! Display metadata for paginated list controls.
//!
//! Given a total item count, a page size, a current page, and an optional
//! page-window limit, [`paginate`] computes everything a UI layer needs to
//! render a paginator: the page count, a condensed page sequence with
//! ellipsis markers, previous/next indices, and the item range shown on
//! the current page.

pub mod config;
pub mod error;
pub mod options;
pub mod page_item;
pub mod pagination;
pub mod result;
pub mod window;

pub use config::{PaginationConfig, DEFAULT_PAGE_SIZE};
pub use error::PaginatorError;
pub use options::PaginationOptions;
pub use page_item::{PageItem, ELLIPSIS};
pub use pagination::{clamp_current, page_count, paginate, paginate_clamped, PageInfo};
pub use result::PaginatorResult;
pub use window::build_pages;
