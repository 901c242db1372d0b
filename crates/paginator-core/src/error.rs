use thiserror::Error;

#[derive(Error, Debug)]
pub enum PaginatorError {
    #[error("Invalid page item: {0:?}")]
    InvalidPageItem(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),
}
