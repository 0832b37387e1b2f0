//! hyper integration.
//!
//! middle does not own a listener. It hands you a hyper
//! [`Service`](hyper::service::Service) and leaves accepting connections to
//! whatever server you already run:
//!
//! ```rust,no_run
//! use hyper::server::conn::http1;
//! use hyper_util::rt::TokioIo;
//! use middle::{Pipeline, Request, Response, service};
//! use tokio::net::TcpListener;
//!
//! # async fn run() -> std::io::Result<()> {
//! let chain = Pipeline::new().compile(|_: &mut Request, res: &mut Response| {
//!     res.write("hello");
//! });
//!
//! let listener = TcpListener::bind("127.0.0.1:3000").await?;
//! loop {
//!     let (stream, _) = listener.accept().await?;
//!     let svc = service(chain.clone());
//!     tokio::spawn(async move {
//!         let _ = http1::Builder::new().serve_connection(TokioIo::new(stream), svc).await;
//!     });
//! }
//! # }
//! ```

use std::convert::Infallible;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use bytes::Bytes;
use http::StatusCode;
use http_body_util::Full;
use hyper::body::Incoming;
use hyper::service::Service;
use tracing::error;

use crate::handler::Handler;
use crate::request::Request;
use crate::response::Response;

/// A heap-allocated, type-erased response future.
///
/// Boxed so the service has a nameable `Future` type that is visibly `Send`,
/// which `tokio::spawn` needs.
pub type BoxFuture =
    Pin<Box<dyn Future<Output = Result<http::Response<Full<Bytes>>, Infallible>> + Send>>;

/// Wraps `handler` as a hyper service.
pub fn service<H: Handler>(handler: H) -> HandlerService<H> {
    HandlerService { handler: Arc::new(handler) }
}

/// A [`Handler`] exposed as a hyper [`Service`].
///
/// The error type is [`Infallible`]: a request whose body cannot be read is
/// answered with `400 Bad Request` and the handler is not called.
pub struct HandlerService<H> {
    handler: Arc<H>,
}

impl<H> Clone for HandlerService<H> {
    fn clone(&self) -> Self {
        Self { handler: Arc::clone(&self.handler) }
    }
}

impl<H> fmt::Debug for HandlerService<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerService").finish_non_exhaustive()
    }
}

impl<H: Handler> Service<hyper::Request<Incoming>> for HandlerService<H> {
    type Response = http::Response<Full<Bytes>>;
    type Error = Infallible;
    type Future = BoxFuture;

    fn call(&self, req: hyper::Request<Incoming>) -> Self::Future {
        let handler = Arc::clone(&self.handler);
        Box::pin(async move { dispatch(handler.as_ref(), req).await })
    }
}

// ── Request dispatch ──────────────────────────────────────────────────────────

async fn dispatch<H: Handler>(
    handler: &H,
    req: hyper::Request<Incoming>,
) -> Result<http::Response<Full<Bytes>>, Infallible> {
    let mut req = match Request::from_incoming(req).await {
        Ok(req) => req,
        Err(e) => {
            error!("failed to read request body: {e}");
            let mut res = Response::new();
            res.set_status(StatusCode::BAD_REQUEST);
            return Ok(res.into_http());
        }
    };

    let mut res = Response::new();
    handler.call(&mut req, &mut res);
    Ok(res.into_http())
}
