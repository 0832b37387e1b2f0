//! Outgoing HTTP response type.
//!
//! A [`Response`] is not returned by handlers; it is written to. Every step,
//! wrapper and terminal handler in a chain receives the same `&mut Response`
//! and appends to it, so whatever was written before a step aborts is the
//! response the client sees.

use bytes::{Bytes, BytesMut};
use http::header::{HeaderName, HeaderValue};
use http::{HeaderMap, StatusCode};
use http_body_util::Full;

use crate::error::Error;

/// The in-flight HTTP response.
///
/// Starts as `200 OK` with no headers and an empty body.
///
/// ```rust
/// use http::StatusCode;
/// use middle::Response;
///
/// let mut res = Response::new();
/// res.set_status(StatusCode::CREATED)
///     .insert_header("location", "/users/42")
///     .unwrap()
///     .write("created");
///
/// assert_eq!(res.status(), StatusCode::CREATED);
/// assert_eq!(res.body(), b"created");
/// ```
#[derive(Debug, Default)]
pub struct Response {
    status: StatusCode,
    headers: HeaderMap,
    body: BytesMut,
}

impl Response {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> StatusCode { self.status }
    pub fn headers(&self) -> &HeaderMap { &self.headers }
    pub fn headers_mut(&mut self) -> &mut HeaderMap { &mut self.headers }
    pub fn body(&self) -> &[u8] { &self.body }

    /// Replaces the status code. The last write wins.
    pub fn set_status(&mut self, status: StatusCode) -> &mut Self {
        self.status = status;
        self
    }

    /// Inserts a header, replacing any previous values under the same name.
    pub fn insert_header(&mut self, name: &str, value: &str) -> Result<&mut Self, Error> {
        let name = HeaderName::from_bytes(name.as_bytes())?;
        let value = HeaderValue::from_str(value)?;
        self.headers.insert(name, value);
        Ok(self)
    }

    /// Appends bytes to the body.
    pub fn write(&mut self, chunk: impl AsRef<[u8]>) -> &mut Self {
        self.body.extend_from_slice(chunk.as_ref());
        self
    }

    /// Converts into the `http` response type hyper sends.
    pub fn into_http(self) -> http::Response<Full<Bytes>> {
        let mut res = http::Response::new(Full::new(self.body.freeze()));
        *res.status_mut() = self.status;
        *res.headers_mut() = self.headers;
        res
    }
}
