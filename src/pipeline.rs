//! Route pipeline builder.
//!
//! A [`Pipeline`] is a value. `before`, `after` and `wrap` never touch the
//! pipeline they are called on; they return a new one. That makes it safe to
//! build a base pipeline once and branch it per route:
//!
//! ```rust
//! use middle::{Pipeline, Request, Response};
//!
//! fn auth(_: &mut Request, _: &mut Response) -> bool { true }
//! fn audit(_: &mut Request, _: &mut Response) -> bool { true }
//! fn list(_: &mut Request, res: &mut Response) { res.write("[]"); }
//! fn delete(_: &mut Request, res: &mut Response) { res.write("deleted"); }
//!
//! let authed = Pipeline::new().before([auth]);
//!
//! let list = authed.compile(list);
//! let delete = authed.after([audit]).compile(delete); // `list` never audits
//! ```
//!
//! Global middleware goes through [`use_before`](Pipeline::use_before),
//! [`use_after`](Pipeline::use_after) and [`use_wrap`](Pipeline::use_wrap),
//! which write to the pipeline's shared [`Registry`] instead.

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::chain::Chain;
use crate::handler::Handler;
use crate::middleware::{Step, Wrap};
use crate::registry::{Registry, Stack, boxed};

/// Per-route middleware plus a handle to the global [`Registry`].
#[derive(Clone, Default)]
pub struct Pipeline {
    registry: Registry,
    route: Stack,
}

impl Pipeline {
    /// An empty pipeline with its own, empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty pipeline whose globals come from `registry`.
    pub fn with_registry(registry: Registry) -> Self {
        Self { registry, route: Stack::default() }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    // ── Route scope: returns a new pipeline ──────────────────────────────────

    /// Returns a pipeline with `steps` appended to the route before steps.
    pub fn before<I>(&self, steps: I) -> Self
    where
        I: IntoIterator,
        I::Item: Step,
    {
        let mut next = self.clone();
        next.route.before.extend(boxed(steps));
        next
    }

    /// Returns a pipeline with `steps` appended to the route after steps.
    pub fn after<I>(&self, steps: I) -> Self
    where
        I: IntoIterator,
        I::Item: Step,
    {
        let mut next = self.clone();
        next.route.after.extend(boxed(steps));
        next
    }

    /// Returns a pipeline whose route wrapper is `wrapper`, replacing any
    /// earlier one. A route wrapper always takes precedence over the global
    /// wrapper.
    pub fn wrap(&self, wrapper: impl Wrap) -> Self {
        let mut next = self.clone();
        next.route.wrap = Some(Arc::new(wrapper));
        next
    }

    // ── Global scope: mutates the shared registry ────────────────────────────

    /// See [`Registry::use_before`]. Affects every pipeline sharing this
    /// registry, including chains already compiled from it.
    pub fn use_before<I>(&self, steps: I)
    where
        I: IntoIterator,
        I::Item: Step,
    {
        self.registry.use_before(steps);
    }

    /// See [`Registry::use_after`].
    pub fn use_after<I>(&self, steps: I)
    where
        I: IntoIterator,
        I::Item: Step,
    {
        self.registry.use_after(steps);
    }

    /// See [`Registry::use_wrap`].
    pub fn use_wrap(&self, wrapper: impl Wrap) {
        self.registry.use_wrap(wrapper);
    }

    // ── Compile ──────────────────────────────────────────────────────────────

    /// Binds `terminal` and returns the executable chain.
    ///
    /// The route middleware is frozen here; the globals are not (see
    /// [`Registry`]). The pipeline stays usable for further branching.
    pub fn compile(&self, terminal: impl Handler) -> Chain {
        debug!(
            before = self.route.before.len(),
            after = self.route.after.len(),
            wrapped = self.route.wrap.is_some(),
            "chain compiled"
        );
        Chain::new(self.registry.clone(), self.route.clone(), Arc::new(terminal))
    }
}

impl fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("registry", &self.registry)
            .field("route", &self.route)
            .finish()
    }
}
