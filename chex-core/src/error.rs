use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChexError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed baseline: {0}")]
    MalformedBaseline(String),

    #[error("duplicate filename in batch: {0}")]
    DuplicateName(String),
}

// Convenient crate-wide result type
pub type Result<T> = std::result::Result<T, ChexError>;
