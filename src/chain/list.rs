//! Tuple-backed aspect lists.
//!
//! A chain stores its aspects in a plain tuple `(A0, A1, .., An)`. The
//! traits here give that tuple the traversal protocol, typed positional
//! access and slot-wise conversion; their impls for arities 1..=12 are
//! generated by `macros::impl_aspect_lists!`.
//!
//! Traversal order:
//!
//! ```text
//! before   0 ─▶ 1 ─▶ .. ─▶ N-1
//! after    N-1 ─▶ .. ─▶ 1 ─▶ 0
//! error    N-1 ─▶ .. ─▶ 1 ─▶ 0      (the unwind path)
//! destroy  N-1 ─▶ .. ─▶ 1 ─▶ 0
//! ```
//!
//! Each slot is gated on its own `HOOKS` constant; a slot without a hook
//! never affects its neighbours.

use crate::engine::Failure;
use crate::probe::Hooks;
use crate::resolve::ConstructError;

/// An ordered, fixed-arity list of aspects.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not an aspect list",
    label = "expected a tuple of 1 to 12 aspects",
    note = "every element must implement `Aspect`; a single aspect is written `(A,)`"
)]
pub trait AspectList {
    const LEN: usize;

    /// Union of every slot's hooks.
    const HOOKS: Hooks;

    /// Hooks of slot `index`, `None` past the end.
    fn slot_hooks(index: usize) -> Option<Hooks>;

    fn run_before(&self);
    fn run_before_mut(&mut self);

    fn run_after(&self);
    fn run_after_mut(&mut self);

    fn run_error(&self, failure: &Failure<'_>);
    fn run_error_mut(&mut self, failure: &Failure<'_>);

    fn run_destroy(&self);
    fn run_destroy_mut(&mut self);
}

/// Typed access to slot `I`.
#[diagnostic::on_unimplemented(
    message = "slot index out of range for aspect list `{Self}`",
    label = "no aspect at this position"
)]
pub trait Slot<const I: usize> {
    type Aspect;

    fn slot(&self) -> &Self::Aspect;
    fn slot_mut(&mut self) -> &mut Self::Aspect;
}

/// Slot-wise infallible conversion (`Into` per position).
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be converted slot by slot into `{Dst}`",
    note = "implicit construction needs `From` for every slot at the same position; use `try_from_values` / `try_convert` for `TryFrom`"
)]
pub trait IntoList<Dst> {
    fn into_list(self) -> Dst;
}

/// Slot-wise fallible conversion (`TryFrom` per position).
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be converted slot by slot into `{Dst}`, even explicitly",
    note = "every slot needs `TryFrom` its initializer, with an error convertible into `Box<dyn Error + Send + Sync>`"
)]
pub trait TryIntoList<Dst> {
    fn try_into_list(self) -> Result<Dst, ConstructError>;
}

macros::impl_aspect_lists!(12);
