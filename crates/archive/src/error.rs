//! Archive Error Types
//!
//! This module provides structured errors using `exn` for automatic location
//! tracking and error tree construction.

use derive_more::{Display, Error};

/// An archive error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for archive operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
///
/// These describe what the caller should *do*, not what went wrong internally.
#[derive(Debug, Display, Error)]
pub enum ErrorKind {
    /// The HTTP client could not be constructed.
    #[display("could not construct the HTTP client")]
    Client,
    /// The request never produced a response (DNS, connect, timeout, TLS).
    #[display("failed to reach {url}")]
    Http {
        /// The URL that was being requested.
        url: String,
    },
    /// The server answered with a non-success status code.
    #[display("request for {url} returned status {status}")]
    Status {
        /// The URL that was being requested.
        url: String,
        /// The HTTP status code received.
        status: u16,
    },
    /// The timestamp is not a valid `YYYYMMDD` or `YYYYMMDDHHMMSS` value.
    #[display("invalid archive timestamp: {_0}")]
    InvalidTimestamp(#[error(not(source))] String),
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            // Transport failures are often transient.
            ErrorKind::Http { .. } => true,
            ErrorKind::Client | ErrorKind::Status { .. } | ErrorKind::InvalidTimestamp(_) => false,
        }
    }
}
