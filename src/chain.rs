//! The compiled, executable middleware chain.
//!
//! # Execution order
//!
//! ```text
//! global before ─▶ route before ─▶ wrapper(terminal) ─▶ route after ─▶ global after
//! ```
//!
//! Global middleware is the outermost layer in both directions: it is the
//! first thing a request meets and the last thing that touches the response.
//!
//! A step returning `false` ends the request on the spot. An abort in either
//! before list skips the handler and both after lists. An abort in the route
//! after list skips the global after list. Whatever was written to the
//! response up to that point is what gets sent.
//!
//! The wrapper is the route wrapper if one was set, else the global wrapper,
//! else none and the terminal is called directly.

use std::fmt;
use std::sync::Arc;

use crate::handler::{BoxedHandler, Handler};
use crate::middleware::{Next, Scope, run_steps};
use crate::registry::{Registry, Stack};
use crate::request::Request;
use crate::response::Response;

/// A terminal handler bound to its middleware.
///
/// Produced by [`Pipeline::compile`](crate::Pipeline::compile). A `Chain` is
/// itself a [`Handler`], so it can be served directly or used as the
/// terminal of another pipeline. Cloning is cheap and invocations share no
/// mutable state, so one chain can serve any number of concurrent requests.
#[derive(Clone)]
pub struct Chain {
    registry: Registry,
    route: Arc<Stack>,
    terminal: BoxedHandler,
}

impl Chain {
    pub(crate) fn new(registry: Registry, route: Stack, terminal: BoxedHandler) -> Self {
        Self { registry, route: Arc::new(route), terminal }
    }

    /// Runs the chain for `req` against a fresh `200 OK` response and returns
    /// what was written.
    pub fn handle(&self, mut req: Request) -> Response {
        let mut res = Response::new();
        self.run(&mut req, &mut res);
        res
    }

    fn run(&self, req: &mut Request, res: &mut Response) {
        let globals = self.registry.snapshot();

        if !run_steps(Scope::GlobalBefore, &globals.before, req, res)
            || !run_steps(Scope::RouteBefore, &self.route.before, req, res)
        {
            return;
        }

        match self.route.wrap.as_ref().or(globals.wrap.as_ref()) {
            Some(wrapper) => wrapper.wrap(req, res, Next::new(self.terminal.as_ref())),
            None => self.terminal.call(req, res),
        }

        if run_steps(Scope::RouteAfter, &self.route.after, req, res) {
            run_steps(Scope::GlobalAfter, &globals.after, req, res);
        }
    }
}

impl Handler for Chain {
    fn call(&self, req: &mut Request, res: &mut Response) {
        self.run(req, res);
    }
}

impl fmt::Debug for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Chain")
            .field("registry", &self.registry)
            .field("route", &self.route)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Pipeline;

    fn terminal(_: &mut Request, res: &mut Response) {
        res.write("final");
    }

    #[test]
    fn empty_chain_runs_only_the_terminal() {
        let res = Pipeline::new().compile(terminal).handle(Request::default());
        assert_eq!(res.body(), b"final");
    }

    #[test]
    fn route_wrapper_shadows_global_wrapper() {
        let pipeline = Pipeline::new();
        pipeline.use_wrap(|req: &mut Request, res: &mut Response, next: Next<'_>| {
            res.write("global ");
            next.run(req, res);
        });
        let chain = pipeline
            .wrap(|req: &mut Request, res: &mut Response, next: Next<'_>| {
                res.write("route ");
                next.run(req, res);
            })
            .compile(terminal);

        assert_eq!(chain.handle(Request::default()).body(), b"route final");
    }

    #[test]
    fn globals_are_read_per_invocation() {
        let pipeline = Pipeline::new();
        let chain = pipeline.compile(terminal);
        assert_eq!(chain.handle(Request::default()).body(), b"final");

        pipeline.use_before([|_: &mut Request, res: &mut Response| {
            res.write("late ");
            true
        }]);
        assert_eq!(chain.handle(Request::default()).body(), b"late final");
    }

    #[test]
    fn chain_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync + 'static>() {}
        assert_send_sync::<Chain>();
    }
}
