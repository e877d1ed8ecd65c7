use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("invalid request at row {row}: {reason}")]
    InvalidRequest { row: usize, reason: String },
}

pub type DataResult<T> = Result<T, DataError>;
