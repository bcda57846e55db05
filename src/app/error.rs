use thiserror::Error;

#[derive(Error, Debug)]
pub enum ThreaderError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No extractable content at {0}")]
    NoExtractableContent(String),

    #[error("Placeholder page returned by {url} on all {attempts} attempts")]
    PlaceholderRetriesExhausted { url: String, attempts: u32 },

    #[error("Invalid selector: {0}")]
    InvalidSelector(String),

    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, ThreaderError>;
