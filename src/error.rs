use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShippingError {
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Invalid timestamp: {0}")]
    DateTimeError(#[from] chrono::ParseError),
}

pub type Result<T> = std::result::Result<T, ShippingError>;
