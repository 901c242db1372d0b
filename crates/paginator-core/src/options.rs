use serde::{Deserialize, Serialize};

use crate::config::{PaginationConfig, DEFAULT_PAGE_SIZE};

/// Input record for [`paginate`](crate::paginate).
///
/// Unset optional fields select the documented defaults; a zero
/// `current` or `page_size` is treated the same as unset. `page_limit`
/// left unset disables condensation entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationOptions {
    /// Total item count.
    pub total: i64,
    /// 1-based current page. `None` or `Some(0)` means page 1.
    #[serde(default)]
    pub current: Option<i64>,
    /// Items per page. `None` or `Some(0)` means 10.
    #[serde(default)]
    pub page_size: Option<i64>,
    /// Maximum page entries to display before condensing with ellipses.
    #[serde(default)]
    pub page_limit: Option<i64>,
}

impl PaginationOptions {
    pub fn new(total: i64) -> Self {
        Self {
            total,
            ..Self::default()
        }
    }

    /// Build options with display fields filled from configured defaults.
    pub fn from_config(total: i64, config: &PaginationConfig) -> Self {
        Self {
            total,
            current: None,
            page_size: config.page_size,
            page_limit: config.page_limit,
        }
    }

    pub fn with_current(mut self, current: i64) -> Self {
        self.current = Some(current);
        self
    }

    pub fn with_page_size(mut self, page_size: i64) -> Self {
        self.page_size = Some(page_size);
        self
    }

    pub fn with_page_limit(mut self, page_limit: i64) -> Self {
        self.page_limit = Some(page_limit);
        self
    }

    /// Current page after zero-means-default resolution.
    pub(crate) fn effective_current(&self) -> i64 {
        match self.current {
            Some(current) if current != 0 => current,
            _ => 1,
        }
    }

    /// Page size after zero-means-default resolution.
    pub(crate) fn effective_page_size(&self) -> i64 {
        match self.page_size {
            Some(size) if size != 0 => size,
            _ => DEFAULT_PAGE_SIZE,
        }
    }
}
