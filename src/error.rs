//! Error types for the transfer operations

use thiserror::Error;

/// Errors raised by listing, reading, and writing.
///
/// Every variant wraps the underlying library fault unchanged. Nothing is
/// retried or recovered at this layer; callers decide what a failure means.
#[derive(Debug, Error)]
pub enum TransferError {
    /// Storage operation failed (list, get, or put)
    #[error("storage operation failed: {0}")]
    Storage(#[from] opendal::Error),

    /// Gzip compression or decompression failed
    #[error("gzip codec failed: {0}")]
    Gzip(#[from] std::io::Error),

    /// NDJSON decoding or batch assembly failed
    #[error("arrow conversion failed: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    /// Parquet serialization failed
    #[error("parquet serialization failed: {0}")]
    Parquet(#[from] parquet::errors::ParquetError),

    /// Listing delimiter other than "" or "/"
    #[error("unsupported delimiter {0:?}: object listing segments on \"/\" only")]
    UnsupportedDelimiter(String),
}

/// Result type alias for TransferError
pub type Result<T> = std::result::Result<T, TransferError>;
