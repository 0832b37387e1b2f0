//! Per-request tracing span.
//!
//! ```rust
//! use middle::{Pipeline, Request, Response, middleware::trace};
//!
//! let pipeline = Pipeline::new();
//! pipeline.use_wrap(trace::trace());
//! let chain = pipeline.compile(|_: &mut Request, res: &mut Response| {
//!     res.write("ok");
//! });
//! ```

use std::time::Instant;

use tracing::{info, info_span};

use super::wrap::{Next, Wrap};
use crate::request::Request;
use crate::response::Response;

/// Wrapper that runs the handler inside an `http.request` span and logs
/// status and latency once it returns.
#[derive(Clone, Copy, Debug, Default)]
pub struct Trace;

/// Shorthand for [`Trace`].
pub fn trace() -> Trace {
    Trace
}

impl Wrap for Trace {
    fn wrap(&self, req: &mut Request, res: &mut Response, next: Next<'_>) {
        let span = info_span!("http.request", method = %req.method(), path = %req.path());
        let _enter = span.enter();

        let start = Instant::now();
        next.run(req, res);

        info!(
            status = res.status().as_u16(),
            latency = ?start.elapsed(),
            "request handled"
        );
    }
}
