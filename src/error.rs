//! Unified error type.

/// The error type returned by middle's fallible operations.
///
/// The pipeline engine itself never fails: a step that wants to stop the
/// request writes its response and returns `false`. This type only surfaces
/// problems at the transport boundary, reading a request body off the wire
/// or putting a malformed header on a [`Response`](crate::Response).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The request body could not be read from the connection.
    #[error("body: {0}")]
    Body(#[from] hyper::Error),

    /// A header name or value was not valid HTTP.
    #[error("header: {0}")]
    Header(#[from] http::Error),
}

impl From<http::header::InvalidHeaderName> for Error {
    fn from(e: http::header::InvalidHeaderName) -> Self {
        Self::Header(e.into())
    }
}

impl From<http::header::InvalidHeaderValue> for Error {
    fn from(e: http::header::InvalidHeaderValue) -> Self {
        Self::Header(e.into())
    }
}
