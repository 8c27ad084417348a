//! Shared error types for the target generator

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SharedError {
    #[error("Invalid parameter: {parameter}")]
    InvalidParameter { parameter: String },

    #[error("Locale mapping not found for country {country}")]
    LocaleMappingMiss { country: String },
}

pub type SharedResult<T> = Result<T, SharedError>;
