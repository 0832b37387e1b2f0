//! Wrappers: code that runs around the terminal handler.

use std::fmt;
use std::sync::Arc;

use crate::handler::Handler;
use crate::request::Request;
use crate::response::Response;

/// Encloses the terminal handler.
///
/// A wrapper receives a [`Next`] and decides whether, when and how many times
/// to call it. Code before `next.run` sees the request first, code after it
/// sees what the handler wrote.
///
/// ```rust
/// use middle::{Next, Request, Response};
///
/// fn envelope(req: &mut Request, res: &mut Response, next: Next<'_>) {
///     res.write("[");
///     next.run(req, res);
///     res.write("]");
/// }
/// ```
pub trait Wrap: Send + Sync + 'static {
    fn wrap(&self, req: &mut Request, res: &mut Response, next: Next<'_>);
}

pub(crate) type BoxedWrap = Arc<dyn Wrap>;

impl<F> Wrap for F
where
    F: Fn(&mut Request, &mut Response, Next<'_>) + Send + Sync + 'static,
{
    fn wrap(&self, req: &mut Request, res: &mut Response, next: Next<'_>) {
        (self)(req, res, next)
    }
}

/// Handle to the terminal handler, given to a [`Wrap`].
///
/// `Copy`: calling it twice runs the handler twice, not calling it skips the
/// handler. Either is the wrapper's call to make.
#[derive(Clone, Copy)]
pub struct Next<'a> {
    handler: &'a dyn Handler,
}

impl<'a> Next<'a> {
    pub(crate) fn new(handler: &'a dyn Handler) -> Self {
        Self { handler }
    }

    pub fn run(self, req: &mut Request, res: &mut Response) {
        self.handler.call(req, res);
    }
}

impl fmt::Debug for Next<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Next").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terminal(_req: &mut Request, res: &mut Response) {
        res.write("final ");
    }

    #[test]
    fn wrapper_runs_around_next() {
        let w = |req: &mut Request, res: &mut Response, next: Next<'_>| {
            res.write("start ");
            next.run(req, res);
            res.write("end");
        };

        let mut res = Response::new();
        w.wrap(&mut Request::default(), &mut res, Next::new(&terminal));
        assert_eq!(res.body(), b"start final end");
    }

    #[test]
    fn next_may_run_more_than_once_or_not_at_all() {
        let twice = |req: &mut Request, res: &mut Response, next: Next<'_>| {
            next.run(req, res);
            next.run(req, res);
        };
        let never = |_: &mut Request, res: &mut Response, _: Next<'_>| {
            res.write("skipped");
        };

        let mut res = Response::new();
        twice.wrap(&mut Request::default(), &mut res, Next::new(&terminal));
        assert_eq!(res.body(), b"final final ");

        let mut res = Response::new();
        never.wrap(&mut Request::default(), &mut res, Next::new(&terminal));
        assert_eq!(res.body(), b"skipped");
    }
}
