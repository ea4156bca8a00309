use thiserror::Error;

#[derive(Error, Debug)]
pub enum TallyError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid date '{0}' (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Invalid amount '{0}' (expected a number)")]
    InvalidAmount(String),

    #[error("Invalid threshold '{0}' (expected a number)")]
    InvalidThreshold(String),

    #[error("Malformed transaction file: {0}")]
    MalformedRecord(String),
}

pub type Result<T> = std::result::Result<T, TallyError>;
