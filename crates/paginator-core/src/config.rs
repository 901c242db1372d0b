use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::result::PaginatorResult;

/// Page size applied when neither the caller nor the config file sets one.
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Application-level display defaults for paginated list controls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationConfig {
    /// Items per page when the caller leaves `page_size` unset.
    #[serde(default)]
    pub page_size: Option<i64>,
    /// Page-window limit when the caller leaves `page_limit` unset.
    #[serde(default)]
    pub page_limit: Option<i64>,
}

impl PaginationConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/paginator/config.toml"))
        }
        #[cfg(target_os = "linux")]
        {
            dirs::config_dir().map(|config| config.join("paginator/config.toml"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|config| config.join("paginator\\config.toml"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }

    /// Load from the per-OS config path, falling back to defaults when the
    /// file is missing or unreadable.
    pub fn load() -> Self {
        if let Some(config_path) = Self::config_path() {
            if config_path.exists() {
                if let Ok(config) = Self::load_from(&config_path) {
                    return config;
                }
            }
        }
        Self::default()
    }

    /// Load from an explicit path, reporting read and parse failures.
    pub fn load_from(path: &Path) -> PaginatorResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn effective_page_size(&self) -> i64 {
        match self.page_size {
            Some(size) if size != 0 => size,
            _ => DEFAULT_PAGE_SIZE,
        }
    }
}
