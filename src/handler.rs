//! Handler trait and type erasure.
//!
//! # The native handler signature
//!
//! Everything that produces a response in middle has one shape:
//!
//! ```text
//! fn name(req: &mut Request, res: &mut Response)
//! ```
//!
//! Terminal handlers have it, and so does the [`Chain`](crate::Chain) that
//! [`Pipeline::compile`](crate::Pipeline::compile) returns. That symmetry is
//! what lets a compiled chain be handed straight to the transport (see
//! [`service()`](crate::service())) or used as the terminal of another pipeline.
//!
//! # How handlers are stored
//!
//! A chain has to hold a handler of *some* concrete type, and chains built
//! from different handlers must be the same type so a server can keep them
//! side by side. So the handler hides behind a trait object:
//!
//! ```text
//! fn hello(req, res) { … }              ← user writes this
//!        ↓ pipeline.compile(hello)
//! Arc::new(hello)                       ← BoxedHandler = Arc<dyn Handler>
//!        ↓
//! handler.call(req, res) per request    ← one vtable dispatch
//! ```
//!
//! `Arc` rather than `Box` so that cloning a chain (one per connection
//! task, say) is an atomic increment, not a deep copy.

use std::sync::Arc;

use crate::request::Request;
use crate::response::Response;

/// Implemented for every valid handler.
///
/// You rarely implement this yourself. It is automatically satisfied for any
/// function or closure with the signature:
///
/// ```text
/// Fn(&mut Request, &mut Response) + Send + Sync + 'static
/// ```
///
/// Handlers have no continue/abort outcome. Once called, a handler is
/// presumed to have produced its response; a failing handler writes an error
/// response or panics, and a panic unwinds to whoever invoked the chain.
pub trait Handler: Send + Sync + 'static {
    fn call(&self, req: &mut Request, res: &mut Response);
}

/// A heap-allocated, type-erased handler shared across concurrent requests.
pub type BoxedHandler = Arc<dyn Handler>;

impl<F> Handler for F
where
    F: Fn(&mut Request, &mut Response) + Send + Sync + 'static,
{
    fn call(&self, req: &mut Request, res: &mut Response) {
        self(req, res)
    }
}
