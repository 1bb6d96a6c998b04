use crate::utils::output::OutputStyle;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error("Invalid {kind} '{value}'. Please choose one of: {expected}")]
    InvalidInput {
        kind: String,
        value: String,
        expected: String,
    },

    #[error("Input closed before a value was entered")]
    InputClosed,

    #[error("IO error: {0}")]
    Io(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for consistent error handling across the application
pub type AppResult<T> = Result<T, AppError>;

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err.to_string())
    }
}

/// Print an error that reached `main`. Input errors are handled by the prompt loop.
pub fn report_error(err: &AppError) {
    eprintln!("❌ {}", OutputStyle::error(&err.to_string()));
}
