//! Error types for presigning operations

use thiserror::Error;

/// Result type for presigning operations
pub type BucketResult<T> = Result<T, BucketError>;

/// Errors that can occur while issuing presigned URLs
#[derive(Error, Debug)]
pub enum BucketError {
    /// S3 service error
    #[error("S3 service error: {0}")]
    S3Error(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),
}
