//! # middle
//!
//! Before, after and around: middleware pipelines for HTTP handlers.
//!
//! ## The contract
//!
//! You write a handler. middle runs things before it, after it, and around
//! it, in an order you can predict without reading the source:
//!
//! ```text
//! global before ─▶ route before ─▶ wrapper(handler) ─▶ route after ─▶ global after
//! ```
//!
//! - **Steps** return `true` to continue or `false` to stop. Stopping is not
//!   an error; the step has already written the response it wants sent.
//! - **Wrappers** get a [`Next`] and decide if and when the handler runs.
//!   A route wrapper shadows the global one.
//! - **Route** middleware is added through a value-semantics builder, so a
//!   base [`Pipeline`] can be branched per route without leaks between
//!   branches.
//! - **Global** middleware lives in a shared [`Registry`], set once at
//!   startup and read by every chain when it runs.
//!
//! What middle intentionally ignores: routing, listeners, body parsing.
//! Bring your own router; middle hands back a [`Handler`] and, through
//! [`service()`], a hyper service.
//!
//! ## Quick start
//!
//! ```rust
//! use http::StatusCode;
//! use middle::{Next, Pipeline, Request, Response};
//!
//! fn require_token(req: &mut Request, res: &mut Response) -> bool {
//!     if req.header("authorization").is_some() {
//!         return true;
//!     }
//!     res.set_status(StatusCode::UNAUTHORIZED);
//!     false
//! }
//!
//! fn no_store(_: &mut Request, res: &mut Response) -> bool {
//!     res.insert_header("cache-control", "no-store").is_ok()
//! }
//!
//! fn timed(req: &mut Request, res: &mut Response, next: Next<'_>) {
//!     let start = std::time::Instant::now();
//!     next.run(req, res);
//!     let _elapsed = start.elapsed();
//! }
//!
//! fn get_user(_: &mut Request, res: &mut Response) {
//!     res.write(r#"{"id":42}"#);
//! }
//!
//! let app = Pipeline::new();
//! app.use_before([require_token]);
//! app.use_wrap(timed);
//!
//! let get_user = app.after([no_store]).compile(get_user);
//!
//! let res = get_user.handle(Request::default());
//! assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
//! assert!(res.body().is_empty());
//! ```

mod chain;
mod error;
mod handler;
mod pipeline;
mod registry;
mod request;
mod response;
mod service;

pub mod middleware;

pub use chain::Chain;
pub use error::Error;
pub use handler::{BoxedHandler, Handler};
pub use middleware::{Next, Step, Wrap};
pub use pipeline::Pipeline;
pub use registry::Registry;
pub use request::Request;
pub use response::Response;
pub use service::{BoxFuture, HandlerService, service};
