//! Target generator error types

use shared::SharedError;
use thiserror::Error;

/// Result type for generator operations
pub type TgenResult<T> = Result<T, TgenError>;

/// Generator error types
#[derive(Error, Debug)]
pub enum TgenError {
    #[error("Brand resolution failed for '{brand}': {message}")]
    ResolutionError { brand: String, message: String },

    #[error("Invalid input: {message}")]
    InputError { message: String },

    #[error("Output write failed for {path}: {message}")]
    OutputError { path: String, message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Shared component error: {0}")]
    SharedError(#[from] SharedError),

    #[error("Task join error: {0}")]
    JoinError(#[from] tokio::task::JoinError),
}

impl TgenError {
    pub fn resolution(brand: impl Into<String>, message: impl Into<String>) -> Self {
        TgenError::ResolutionError {
            brand: brand.into(),
            message: message.into(),
        }
    }

    pub fn input(message: impl Into<String>) -> Self {
        TgenError::InputError {
            message: message.into(),
        }
    }

    pub fn output(path: impl Into<String>, message: impl Into<String>) -> Self {
        TgenError::OutputError {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        TgenError::ConfigError {
            message: message.into(),
        }
    }
}
