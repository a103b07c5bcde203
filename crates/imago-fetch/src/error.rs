//! Error types for imago-fetch.
//!
//! Only one kind of failure is ever raised to callers: the image they
//! asked for cannot exist where they pointed. Transport faults carry
//! their own taxonomy below, and everything in it except
//! [`TransportError::Missing`] is absorbed into
//! [`FetchStatus::Skipped`](crate::FetchStatus::Skipped) instead of
//! being raised.

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The remote resource does not exist, or the destination path
    /// cannot hold it.
    #[error("image not found: {url}")]
    ImageNotFound { url: String },
}

pub type Result<T> = std::result::Result<T, FetchError>;

/// Faults a transport can raise while opening or reading.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The remote object does not exist (HTTP 404/410 class).
    #[error("resource missing: {url}")]
    Missing { url: String },

    /// The URL could not be parsed into a request.
    #[error("invalid url: {0}")]
    InvalidUrl(String),

    /// Any other transport or I/O fault.
    #[error("transport fault: {message}")]
    Fault { message: String },
}

impl TransportError {
    pub fn fault(message: impl Into<String>) -> Self {
        TransportError::Fault {
            message: message.into(),
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, TransportError::Missing { .. })
    }
}
