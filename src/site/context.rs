//! Save/restore service for the current call site.

use core::cell::Cell;

use super::call_site::CallSite;

/// A per-thread cell holding an opaque "current call site" marker.
///
/// The engine never interprets the marker; it only saves it, resets it to
/// [`unset`](SiteContext::unset) for the duration of a call, and puts the
/// saved value back.
pub trait SiteContext {
    type Marker;

    fn current(&self) -> Self::Marker;

    fn set(&self, marker: Self::Marker);

    fn unset(&self) -> Self::Marker;

    fn is_unset(&self, marker: &Self::Marker) -> bool;
}

impl<C: SiteContext + ?Sized> SiteContext for &C {
    type Marker = C::Marker;

    fn current(&self) -> Self::Marker {
        (**self).current()
    }

    fn set(&self, marker: Self::Marker) {
        (**self).set(marker)
    }

    fn unset(&self) -> Self::Marker {
        (**self).unset()
    }

    fn is_unset(&self, marker: &Self::Marker) -> bool {
        (**self).is_unset(marker)
    }
}

// =============================================================================
// Thread-local default
// =============================================================================

thread_local! {
    static CURRENT: Cell<CallSite> = const { Cell::new(CallSite::UNKNOWN) };
}

/// The thread-local [`CallSite`] cell used by every `invoke` that is not
/// given a context explicitly.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadSite;

impl SiteContext for ThreadSite {
    type Marker = CallSite;

    fn current(&self) -> CallSite {
        CURRENT.with(Cell::get)
    }

    fn set(&self, marker: CallSite) {
        CURRENT.with(|cell| cell.set(marker));
    }

    fn unset(&self) -> CallSite {
        CallSite::UNKNOWN
    }

    fn is_unset(&self, marker: &CallSite) -> bool {
        marker.is_unknown()
    }
}

/// Current call site of this thread.
pub fn current_site() -> CallSite {
    ThreadSite.current()
}

/// Record `site` unless an earlier mark already claimed this invocation.
///
/// Returns whether `site` was recorded. Backs [`mark_site!`](crate::mark_site).
pub fn mark(site: CallSite) -> bool {
    let context = ThreadSite;
    if context.is_unset(&context.current()) {
        context.set(site);
        true
    } else {
        false
    }
}

// =============================================================================
// Scope guard
// =============================================================================

/// Resets the marker on entry and restores the saved one on drop, so the
/// outer call site survives nested invocations, failures and panics alike.
#[must_use = "the saved call site is restored when the scope is dropped"]
pub struct SiteScope<C: SiteContext> {
    context: C,
    saved: Option<C::Marker>,
}

impl<C: SiteContext> SiteScope<C> {
    pub fn enter(context: C) -> Self {
        let saved = context.current();
        context.set(context.unset());
        SiteScope { context, saved: Some(saved) }
    }

    /// The marker that will be restored.
    pub fn saved(&self) -> Option<&C::Marker> {
        self.saved.as_ref()
    }
}

impl<C: SiteContext> Drop for SiteScope<C> {
    fn drop(&mut self) {
        if let Some(saved) = self.saved.take() {
            self.context.set(saved);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scope_resets_then_restores() {
        let outer = CallSite::new("outer.rs", "outer", 1, 1);
        ThreadSite.set(outer);
        {
            let scope = SiteScope::enter(ThreadSite);
            assert_eq!(scope.saved(), Some(&outer));
            assert!(current_site().is_unknown());
            assert!(mark(CallSite::new("inner.rs", "inner", 2, 2)));
            assert!(!mark(CallSite::new("later.rs", "later", 3, 3)));
            assert_eq!(current_site().function(), "inner");
        }
        assert_eq!(current_site(), outer);
        ThreadSite.set(CallSite::UNKNOWN);
    }
}
