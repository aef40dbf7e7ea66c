//! The `Aspect` trait and view adaptors.
//!
//! An aspect overrides any subset of the eight hook methods and lists them
//! in [`Aspect::HOOKS`]. Writing that list by hand is allowed but
//! `#[aspect]` derives it from the receivers it sees:
//!
//! ```ignore
//! struct Logger;
//!
//! #[aspect]
//! impl Logger {
//!     fn before(&self) { println!("enter"); }
//!     fn after(&mut self) { println!("exit"); }
//! }
//!
//! assert_eq!(Logger::HOOKS, Hooks::BEFORE.union(Hooks::AFTER_MUT));
//! ```
//!
//! The engine only calls a hook whose flag is set, so an override missing
//! from `HOOKS` is never run.
//!
//! Malformed hooks are rejected when the impl is expanded:
//!
//! ```compile_fail
//! use tola_aop::aspect;
//!
//! struct Stray;
//!
//! #[aspect]
//! impl Stray {
//!     fn before(&self, extra: u32) {}
//! }
//! ```
//!
//! ```compile_fail
//! use tola_aop::aspect;
//!
//! struct Greedy;
//!
//! #[aspect]
//! impl Greedy {
//!     fn after(self) -> bool { true }
//! }
//! ```

use core::fmt;
use core::ops::Deref;

use super::hooks::Hooks;
use crate::engine::Failure;

/// A value that may react to the lifecycle of an invocation.
///
/// The `*_mut` methods default to their shared counterpart: an aspect that
/// only defines `before(&self)` is still called under exclusive access.
///
/// # Implementing by hand
///
/// `HOOKS` defaults to [`Hooks::NONE`]. A hand-written impl must list every
/// hook it overrides there: the engine consults `HOOKS` alone, so an
/// override without its flag is silently skipped. `#[aspect]` fills the
/// list in and is the safer way to write an aspect.
///
/// ```
/// use std::cell::Cell;
/// use tola_aop::prelude::*;
///
/// struct Listed(Cell<u32>);
///
/// impl Aspect for Listed {
///     const HOOKS: Hooks = Hooks::BEFORE;
///
///     fn before(&self) {
///         self.0.set(self.0.get() + 1);
///     }
/// }
///
/// struct Unlisted(Cell<u32>);
///
/// impl Aspect for Unlisted {
///     fn before(&self) {
///         self.0.set(self.0.get() + 1);
///     }
/// }
///
/// let chain = Chain::new((Listed(Cell::new(0)), Unlisted(Cell::new(0))));
/// chain.invoke(|| ());
/// assert_eq!(chain.get::<0>().0.get(), 1);
/// assert_eq!(chain.get::<1>().0.get(), 0);
/// ```
pub trait Aspect {
    /// Hooks this type overrides. Left at the default, no hook runs.
    const HOOKS: Hooks = Hooks::NONE;

    #[inline(always)]
    fn before(&self) {}

    #[inline(always)]
    fn before_mut(&mut self) {
        self.before()
    }

    #[inline(always)]
    fn after(&self) {}

    #[inline(always)]
    fn after_mut(&mut self) {
        self.after()
    }

    #[inline(always)]
    fn error(&self, failure: &Failure<'_>) {
        let _ = failure;
    }

    #[inline(always)]
    fn error_mut(&mut self, failure: &Failure<'_>) {
        self.error(failure)
    }

    #[inline(always)]
    fn destroy(&self) {}

    #[inline(always)]
    fn destroy_mut(&mut self) {
        self.destroy()
    }
}

// =============================================================================
// Shared-view adaptors
// =============================================================================

/// A borrowed aspect only offers its shared view.
impl<A: Aspect + ?Sized> Aspect for &A {
    const HOOKS: Hooks = A::HOOKS.shared_only();

    fn before(&self) {
        (**self).before()
    }
    fn before_mut(&mut self) {
        (**self).before()
    }
    fn after(&self) {
        (**self).after()
    }
    fn after_mut(&mut self) {
        (**self).after()
    }
    fn error(&self, failure: &Failure<'_>) {
        (**self).error(failure)
    }
    fn error_mut(&mut self, failure: &Failure<'_>) {
        (**self).error(failure)
    }
    fn destroy(&self) {
        (**self).destroy()
    }
    fn destroy_mut(&mut self) {
        (**self).destroy()
    }
}

/// Owns an aspect but exposes only its shared view, even when the
/// surrounding chain is invoked exclusively.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ReadOnly<A>(pub A);

impl<A> ReadOnly<A> {
    pub fn into_inner(self) -> A {
        self.0
    }
}

impl<A> Deref for ReadOnly<A> {
    type Target = A;

    fn deref(&self) -> &A {
        &self.0
    }
}

impl<A: fmt::Debug> fmt::Debug for ReadOnly<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ReadOnly").field(&self.0).finish()
    }
}

impl<A> From<A> for ReadOnly<A> {
    fn from(aspect: A) -> Self {
        ReadOnly(aspect)
    }
}

impl<A: Aspect> Aspect for ReadOnly<A> {
    const HOOKS: Hooks = A::HOOKS.shared_only();

    fn before(&self) {
        self.0.before()
    }
    fn before_mut(&mut self) {
        self.0.before()
    }
    fn after(&self) {
        self.0.after()
    }
    fn after_mut(&mut self) {
        self.0.after()
    }
    fn error(&self, failure: &Failure<'_>) {
        self.0.error(failure)
    }
    fn error_mut(&mut self, failure: &Failure<'_>) {
        self.0.error(failure)
    }
    fn destroy(&self) {
        self.0.destroy()
    }
    fn destroy_mut(&mut self) {
        self.0.destroy()
    }
}

// =============================================================================
// Forwarding adaptors
// =============================================================================

macro_rules! impl_forwarding_aspect {
    ($($ptr:ty),*) => {$(
        impl<A: Aspect + ?Sized> Aspect for $ptr {
            const HOOKS: Hooks = A::HOOKS;

            fn before(&self) {
                (**self).before()
            }
            fn before_mut(&mut self) {
                (**self).before_mut()
            }
            fn after(&self) {
                (**self).after()
            }
            fn after_mut(&mut self) {
                (**self).after_mut()
            }
            fn error(&self, failure: &Failure<'_>) {
                (**self).error(failure)
            }
            fn error_mut(&mut self, failure: &Failure<'_>) {
                (**self).error_mut(failure)
            }
            fn destroy(&self) {
                (**self).destroy()
            }
            fn destroy_mut(&mut self) {
                (**self).destroy_mut()
            }
        }
    )*};
}

impl_forwarding_aspect!(&mut A, Box<A>);
