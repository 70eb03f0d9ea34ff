use thiserror::Error;

#[derive(Error, Debug)]
pub enum KeycraftError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid Operation: {0}")]
    InvalidOperation(String),

    #[error("Layer not found: {0}")]
    LayerNotFound(String),

    #[error("Unsupported export format: {0}")]
    UnsupportedFormat(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Configuration Error: {0}")]
    Config(String),
}

pub type KcResult<T> = Result<T, KeycraftError>;
