//! Global middleware shared by every chain compiled against it.

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::middleware::{BoxedStep, BoxedWrap, Step, Wrap};

/// One scope's worth of middleware: before steps, after steps and at most one
/// wrapper.
#[derive(Clone, Default)]
pub(crate) struct Stack {
    pub(crate) before: Vec<BoxedStep>,
    pub(crate) after: Vec<BoxedStep>,
    pub(crate) wrap: Option<BoxedWrap>,
}

impl fmt::Debug for Stack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stack")
            .field("before", &self.before.len())
            .field("after", &self.after.len())
            .field("wrap", &self.wrap.is_some())
            .finish()
    }
}

/// Boxes every step up front, so a caller's iterator never runs while a
/// list is being modified.
pub(crate) fn boxed<I>(steps: I) -> Vec<BoxedStep>
where
    I: IntoIterator,
    I::Item: Step,
{
    steps.into_iter().map(|s| Arc::new(s) as BoxedStep).collect()
}

/// Process-wide middleware, registered once at startup.
///
/// A `Registry` is a shared handle: clones point at the same lists, and every
/// [`Chain`](crate::Chain) compiled from a [`Pipeline`](crate::Pipeline) bound
/// to it reads those lists *when it runs*, not when it was compiled. A step
/// registered after `compile` therefore applies to the next request handled
/// by that chain.
///
/// Registration order is execution order within each list. Global before
/// steps run ahead of route before steps; global after steps run once the
/// route after steps are done.
///
/// Each request works on a snapshot taken as it starts. Registering while
/// requests are in flight never exposes a half-updated list, and a step may
/// register more middleware without deadlocking; the change shows up from the
/// next request on.
#[derive(Clone, Default)]
pub struct Registry {
    inner: Arc<RwLock<Arc<Stack>>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends steps that run before every route's own before steps.
    pub fn use_before<I>(&self, steps: I)
    where
        I: IntoIterator,
        I::Item: Step,
    {
        let steps = boxed(steps);
        self.update(|stack| stack.before.extend(steps));
    }

    /// Appends steps that run after every route's own after steps.
    pub fn use_after<I>(&self, steps: I)
    where
        I: IntoIterator,
        I::Item: Step,
    {
        let steps = boxed(steps);
        self.update(|stack| stack.after.extend(steps));
    }

    /// Sets the wrapper used by routes that have none of their own.
    /// Replaces any previous global wrapper.
    pub fn use_wrap(&self, wrapper: impl Wrap) {
        let wrapper: BoxedWrap = Arc::new(wrapper);
        self.update(|stack| stack.wrap = Some(wrapper));
    }

    pub(crate) fn snapshot(&self) -> Arc<Stack> {
        Arc::clone(&self.inner.read())
    }

    // Copy-on-write: in-flight snapshots keep the old lists. `f` must not
    // run caller code; the lock is held.
    fn update(&self, f: impl FnOnce(&mut Stack)) {
        let mut guard = self.inner.write();
        f(Arc::make_mut(&mut guard));
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Registry").field(&*self.snapshot()).finish()
    }
}
