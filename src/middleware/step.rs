//! Before/after steps and the one loop that runs them.

use std::fmt;
use std::sync::Arc;

use tracing::trace;

use crate::request::Request;
use crate::response::Response;

/// A pre- or post-processing step.
///
/// Return `true` to continue with the next step, `false` to abort. Abort is
/// not an error: the step has written the response it wants sent (a `401`,
/// a cached body, ...) and everything after it is skipped.
///
/// Automatically implemented for functions and closures:
///
/// ```rust
/// use http::StatusCode;
/// use middle::{Request, Response};
///
/// fn require_token(req: &mut Request, res: &mut Response) -> bool {
///     if req.header("authorization").is_some() {
///         return true;
///     }
///     res.set_status(StatusCode::UNAUTHORIZED).write("missing token");
///     false
/// }
/// ```
pub trait Step: Send + Sync + 'static {
    fn run(&self, req: &mut Request, res: &mut Response) -> bool;
}

pub(crate) type BoxedStep = Arc<dyn Step>;

impl<F> Step for F
where
    F: Fn(&mut Request, &mut Response) -> bool + Send + Sync + 'static,
{
    fn run(&self, req: &mut Request, res: &mut Response) -> bool {
        (self)(req, res)
    }
}

/// Which of the four step lists is running.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Scope {
    GlobalBefore,
    RouteBefore,
    RouteAfter,
    GlobalAfter,
}

impl Scope {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Self::GlobalBefore => "global-before",
            Self::RouteBefore  => "route-before",
            Self::RouteAfter   => "route-after",
            Self::GlobalAfter  => "global-after",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Runs `steps` in order. Returns `false` as soon as one aborts, leaving the
/// rest of the list unrun.
pub(crate) fn run_steps(
    scope: Scope,
    steps: &[BoxedStep],
    req: &mut Request,
    res: &mut Response,
) -> bool {
    for (index, step) in steps.iter().enumerate() {
        if !step.run(req, res) {
            trace!(%scope, index, remaining = steps.len() - index - 1, "step aborted");
            return false;
        }
    }
    true
}
