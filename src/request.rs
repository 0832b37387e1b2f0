//! Incoming HTTP request type.

use bytes::Bytes;
use http::{Extensions, HeaderMap, Method, Uri};
use http_body_util::BodyExt;
use hyper::body::Incoming;

use crate::error::Error;

/// An incoming HTTP request with its body fully buffered.
///
/// Steps get `&mut Request`, so an early step can stash typed data in the
/// [`extensions`](Request::extensions_mut) for later steps and the terminal
/// handler to pick up.
#[derive(Debug, Default)]
pub struct Request {
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
    extensions: Extensions,
}

impl Request {
    pub(crate) async fn from_incoming(req: hyper::Request<Incoming>) -> Result<Self, Error> {
        let (parts, body) = req.into_parts();
        let body = body.collect().await?.to_bytes();
        Ok(http::Request::from_parts(parts, body).into())
    }

    pub fn method(&self) -> &Method { &self.method }
    pub fn uri(&self) -> &Uri { &self.uri }
    pub fn path(&self) -> &str { self.uri.path() }
    pub fn headers(&self) -> &HeaderMap { &self.headers }
    pub fn body(&self) -> &[u8] { &self.body }
    pub fn extensions(&self) -> &Extensions { &self.extensions }
    pub fn extensions_mut(&mut self) -> &mut Extensions { &mut self.extensions }

    /// Header lookup. Returns `None` for absent or non-UTF-8 values.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

impl From<http::Request<Bytes>> for Request {
    fn from(req: http::Request<Bytes>) -> Self {
        let (parts, body) = req.into_parts();
        Self {
            method: parts.method,
            uri: parts.uri,
            headers: parts.headers,
            body,
            extensions: parts.extensions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_from_http_request() {
        let req: Request = http::Request::post("/users?page=2")
            .header("X-Token", "abc")
            .body(Bytes::from_static(b"{}"))
            .unwrap()
            .into();

        assert_eq!(*req.method(), Method::POST);
        assert_eq!(req.path(), "/users");
        assert_eq!(req.header("x-token"), Some("abc"));
        assert_eq!(req.body(), b"{}");
    }

    #[test]
    fn extensions_carry_typed_data() {
        #[derive(Clone, Debug, PartialEq)]
        struct UserId(u64);

        let mut req = Request::default();
        req.extensions_mut().insert(UserId(7));
        assert_eq!(req.extensions().get::<UserId>(), Some(&UserId(7)));
    }
}
