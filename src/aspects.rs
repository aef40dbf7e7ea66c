//! Ready-made aspects.

use core::fmt;
use core::sync::atomic::{AtomicUsize, Ordering};

use crate::engine::Failure;
use crate::aspect;

/// Counts how often each hook fired.
///
/// Counts are atomic, so a `Counter` can sit in a chain that is invoked
/// from several threads through a shared reference.
#[derive(Default)]
pub struct Counter {
    before: AtomicUsize,
    after: AtomicUsize,
    error: AtomicUsize,
    destroy: AtomicUsize,
}

impl Counter {
    pub const fn new() -> Self {
        Counter {
            before: AtomicUsize::new(0),
            after: AtomicUsize::new(0),
            error: AtomicUsize::new(0),
            destroy: AtomicUsize::new(0),
        }
    }

    pub fn before_calls(&self) -> usize {
        self.before.load(Ordering::Relaxed)
    }

    pub fn after_calls(&self) -> usize {
        self.after.load(Ordering::Relaxed)
    }

    pub fn error_calls(&self) -> usize {
        self.error.load(Ordering::Relaxed)
    }

    pub fn destroy_calls(&self) -> usize {
        self.destroy.load(Ordering::Relaxed)
    }

    /// Invocations that have started but neither finished nor failed.
    pub fn in_flight(&self) -> usize {
        self.before_calls()
            .saturating_sub(self.after_calls() + self.error_calls())
    }
}

#[aspect]
impl Counter {
    fn before(&self) {
        self.before.fetch_add(1, Ordering::Relaxed);
    }

    fn after(&self) {
        self.after.fetch_add(1, Ordering::Relaxed);
    }

    fn error(&self, _failure: &Failure<'_>) {
        self.error.fetch_add(1, Ordering::Relaxed);
    }

    fn destroy(&self) {
        self.destroy.fetch_add(1, Ordering::Relaxed);
    }
}

impl Clone for Counter {
    fn clone(&self) -> Self {
        let counter = Counter::new();
        counter.before.store(self.before_calls(), Ordering::Relaxed);
        counter.after.store(self.after_calls(), Ordering::Relaxed);
        counter.error.store(self.error_calls(), Ordering::Relaxed);
        counter.destroy.store(self.destroy_calls(), Ordering::Relaxed);
        counter
    }
}

impl fmt::Debug for Counter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Counter")
            .field("before", &self.before_calls())
            .field("after", &self.after_calls())
            .field("error", &self.error_calls())
            .field("destroy", &self.destroy_calls())
            .finish()
    }
}

// =============================================================================
// Trace
// =============================================================================

/// Emits a `tracing` event for every hook, tagged with a label.
///
/// `after` and `error` also report the call site the operation marked with
/// [`mark_site!`](crate::mark_site).
#[cfg(feature = "tracing")]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Trace {
    label: &'static str,
}

#[cfg(feature = "tracing")]
impl Trace {
    pub const fn new(label: &'static str) -> Self {
        Trace { label }
    }

    pub const fn label(&self) -> &'static str {
        self.label
    }
}

#[cfg(feature = "tracing")]
impl From<&'static str> for Trace {
    fn from(label: &'static str) -> Self {
        Trace::new(label)
    }
}

#[cfg(feature = "tracing")]
#[aspect]
impl Trace {
    fn before(&self) {
        tracing::debug!(label = self.label, "enter");
    }

    fn after(&self) {
        tracing::debug!(label = self.label, site = %crate::site::current_site(), "exit");
    }

    fn error(&self, failure: &Failure<'_>) {
        tracing::warn!(label = self.label, site = %crate::site::current_site(), %failure, "failed");
    }

    fn destroy(&self) {
        tracing::debug!(label = self.label, "destroy");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::{Aspect, Hooks};
    use crate::Chain;

    #[test]
    fn counter_defines_every_shared_hook() {
        let expected = Hooks::BEFORE
            .union(Hooks::AFTER)
            .union(Hooks::ERROR)
            .union(Hooks::DESTROY);
        assert_eq!(Counter::HOOKS, expected);
    }

    #[test]
    fn counter_counts_invocations() {
        let chain = Chain::new((Counter::new(),));
        chain.invoke(|| ());
        chain.invoke(|| ());

        let counter = chain.get::<0>();
        assert_eq!(counter.before_calls(), 2);
        assert_eq!(counter.after_calls(), 2);
        assert_eq!(counter.in_flight(), 0);
    }
}
