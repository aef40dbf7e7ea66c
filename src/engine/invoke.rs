//! The invocation protocol.
//!
//! ```text
//! SiteScope::enter ─▶ before 0..N-1 ─▶ operation ─┬─ ok ──▶ after N-1..0 ──▶ result
//!                                                 └─ err ─▶ error N-1..0 ──▶ re-raise
//! (scope drop restores the caller's call site on every path)
//! ```
//!
//! Panics are only caught when at least one slot defines an `error` hook
//! under the active view; otherwise they travel through untouched.

use std::panic::{self, AssertUnwindSafe};

use super::failure::{Failure, Reason};
use crate::chain::AspectList;
use crate::log::debug;
use crate::probe::{Access, Hook};
use crate::site::{SiteContext, SiteScope};

// =============================================================================
// Completion kinds
// =============================================================================

/// Decides whether a returned value counts as a failure.
pub trait Completion<R> {
    fn failure(result: &R) -> Option<Failure<'_>>;
}

/// Only panics are failures; every returned value is a success.
pub struct Plain;

/// `Err` values are failures too.
pub struct Checked;

impl<R> Completion<R> for Plain {
    #[inline(always)]
    fn failure(_: &R) -> Option<Failure<'_>> {
        None
    }
}

impl<T, E: Reason> Completion<Result<T, E>> for Checked {
    #[inline]
    fn failure(result: &Result<T, E>) -> Option<Failure<'_>> {
        result.as_ref().err().map(Failure::error)
    }
}

// =============================================================================
// Engine
// =============================================================================

/// Run `op` under the shared view of `slots`.
pub fn run<L, C, K, R, F>(slots: &L, context: C, op: F) -> R
where
    L: AspectList,
    F: FnOnce() -> R,
    C: SiteContext,
    K: Completion<R>,
{
    let _scope = SiteScope::enter(context);
    slots.run_before();

    let catch = L::HOOKS.has(Hook::Error, Access::Shared);
    let result = guarded(catch, op, |failure| slots.run_error(failure));

    if let Some(failure) = K::failure(&result) {
        debug!(aspects = L::LEN, %failure, "operation returned an error");
        slots.run_error(&failure);
        return result;
    }

    slots.run_after();
    result
}

/// Run `op` under the exclusive view of `slots`.
pub fn run_mut<L, C, K, R, F>(slots: &mut L, context: C, op: F) -> R
where
    L: AspectList,
    F: FnOnce() -> R,
    C: SiteContext,
    K: Completion<R>,
{
    let _scope = SiteScope::enter(context);
    slots.run_before_mut();

    let catch = L::HOOKS.has(Hook::Error, Access::Exclusive);
    let result = guarded(catch, op, |failure| slots.run_error_mut(failure));

    if let Some(failure) = K::failure(&result) {
        debug!(aspects = L::LEN, %failure, "operation returned an error");
        slots.run_error_mut(&failure);
        return result;
    }

    slots.run_after_mut();
    result
}

/// Call `op`; if `catch`, report a panic to `on_panic` and resume it with
/// the same payload.
#[inline]
fn guarded<R>(catch: bool, op: impl FnOnce() -> R, on_panic: impl FnOnce(&Failure<'_>)) -> R {
    if !catch {
        return op();
    }
    match panic::catch_unwind(AssertUnwindSafe(op)) {
        Ok(value) => value,
        Err(payload) => {
            let failure = Failure::panic(&*payload);
            debug!(%failure, "operation panicked");
            on_panic(&failure);
            panic::resume_unwind(payload)
        }
    }
}
