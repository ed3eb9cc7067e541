//! Errors raised at the parsing and configuration boundaries.
//!
//! User interaction never produces an error: selecting a disabled day, an
//! out-of-range shortcut or an unknown language all degrade to a no-op or a
//! fallback instead.

#[derive(Debug, thiserror::Error)]
pub enum PickerError {
    #[error("Invalid time value '{0}': expected HH:MM")]
    InvalidTime(String),
    #[error("Invalid date value '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("Invalid picker configuration: {0}")]
    Config(#[from] serde_yaml::Error),
    #[error("Failed to read picker configuration: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PickerError>;
