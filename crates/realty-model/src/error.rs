use thiserror::Error;

#[derive(Debug, Error)]
pub enum RealtyError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("column '{column}' not found in frame")]
    MissingColumn { column: String },
    #[error("unsupported cell in column '{column}' at row {row}: dtype {dtype}")]
    UnsupportedCell {
        column: String,
        row: usize,
        dtype: String,
    },
    #[error("{0}")]
    Message(String),
}

pub type Result<T> = std::result::Result<T, RealtyError>;
