use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum FpkitError {
    #[error("Config error: {0}")]
    Config(String),
    #[error("Invalid date: {input:?}")]
    InvalidDate { input: String },
    #[error("Epoch milliseconds out of range: {0}")]
    DateOutOfRange(i64),
    #[error("Batch size must be positive, got {0}")]
    InvalidBatchSize(usize),
    #[error("Unknown locale: {0}")]
    UnknownLocale(String),
    #[error("UTC offset out of range: {0} minutes")]
    InvalidOffset(i32),
}

pub type Result<T> = std::result::Result<T, FpkitError>;

// Helper conversions
impl From<config::ConfigError> for FpkitError {
    fn from(e: config::ConfigError) -> Self { Self::Config(e.to_string()) }
}
