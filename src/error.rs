use thiserror::Error;

#[derive(Error, Debug)]
pub enum WordbookError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid word: {0}")]
    InvalidWord(String),

    #[error("Explanation error: {0}")]
    Provider(String),

    #[error("Git error: {0}")]
    Git(String),

    #[error("Usage error: {0}")]
    Usage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, WordbookError>;
