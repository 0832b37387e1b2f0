//! Middleware layer.
//!
//! Middleware intercepts requests and responses and is the right place for
//! cross-cutting concerns: structured tracing, authentication, request-id
//! injection, response decoration.
//!
//! Two shapes exist:
//!
//! - [`Step`] runs before or after the handler and returns `true` to
//!   continue or `false` to abort the rest of the chain.
//! - [`Wrap`] runs *around* the handler and holds a [`Next`] it may call
//!   zero, one or several times.
//!
//! Both are attached through a [`Pipeline`](crate::Pipeline), either per
//! route or globally.
//!
//! Built-in middleware:
//! - [`trace`] — per-request span with method, path, status, latency

mod step;
mod wrap;

pub mod trace;

pub use step::Step;
pub use wrap::{Next, Wrap};

pub(crate) use step::{BoxedStep, Scope, run_steps};
pub(crate) use wrap::BoxedWrap;
