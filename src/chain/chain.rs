//! The aspect chain.

use super::list::{AspectList, IntoList, Slot, TryIntoList};
use crate::engine::{self, Checked, Failure, Plain, Reason};
use crate::probe::{Aspect, Hooks};
use crate::resolve::ConstructError;
use crate::site::{SiteContext, ThreadSite};

/// An ordered, fixed-length sequence of aspects sharing one invocation.
///
/// `L` is a tuple of 1 to 12 aspects; slot 0 is the outermost. A chain is
/// never restructured after construction, only cloned, moved or converted.
///
/// ```
/// use tola_aop::prelude::*;
///
/// let chain = Chain::new((Counter::new(), Counter::new()));
/// assert_eq!(chain.invoke(|| 2 + 2), 4);
/// assert_eq!(chain.get::<1>().after_calls(), 1);
/// ```
///
/// Slot indices are checked at compile time:
///
/// ```compile_fail
/// use tola_aop::prelude::*;
///
/// let chain = Chain::new((Counter::new(),));
/// chain.get::<1>();
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Chain<L> {
    slots: L,
}

// =============================================================================
// Construction
// =============================================================================

impl<L: AspectList> Chain<L> {
    pub const LEN: usize = L::LEN;

    /// Chain of exactly these aspects.
    pub const fn new(slots: L) -> Self {
        Chain { slots }
    }

    /// Implicit construction: every value converts into its slot with `Into`.
    pub fn from_values<V: IntoList<L>>(values: V) -> Self {
        Chain::new(values.into_list())
    }

    /// Explicit construction: every value converts into its slot with
    /// `TryFrom`; the first refusal is reported with its slot index.
    pub fn try_from_values<V: TryIntoList<L>>(values: V) -> Result<Self, ConstructError> {
        values.try_into_list().map(Chain::new)
    }

    /// Implicit cross-chain conversion, position by position.
    ///
    /// Converting to the same slot list is a plain move.
    pub fn convert<M>(self) -> Chain<M>
    where
        M: AspectList,
        L: IntoList<M>,
    {
        Chain::new(self.slots.into_list())
    }

    /// Explicit cross-chain conversion, position by position.
    pub fn try_convert<M>(self) -> Result<Chain<M>, ConstructError>
    where
        M: AspectList,
        L: TryIntoList<M>,
    {
        self.slots.try_into_list().map(Chain::new)
    }

    pub fn into_inner(self) -> L {
        self.slots
    }
}

impl<A: Aspect> Chain<(A,)> {
    /// One-slot chain from any value convertible into its aspect.
    pub fn single<X: Into<A>>(value: X) -> Self {
        Chain::new((value.into(),))
    }
}

impl<L: AspectList> From<L> for Chain<L> {
    fn from(slots: L) -> Self {
        Chain::new(slots)
    }
}

impl<A: Aspect> From<A> for Chain<(A,)> {
    fn from(aspect: A) -> Self {
        Chain::new((aspect,))
    }
}

// =============================================================================
// Access
// =============================================================================

impl<L: AspectList> Chain<L> {
    /// Aspect at position `I`.
    pub fn get<const I: usize>(&self) -> &<L as Slot<I>>::Aspect
    where
        L: Slot<I>,
    {
        self.slots.slot()
    }

    /// Aspect at position `I`, exclusively.
    pub fn get_mut<const I: usize>(&mut self) -> &mut <L as Slot<I>>::Aspect
    where
        L: Slot<I>,
    {
        self.slots.slot_mut()
    }

    pub fn as_tuple(&self) -> &L {
        &self.slots
    }

    /// Union of every slot's hooks.
    pub const fn hooks() -> Hooks {
        L::HOOKS
    }

    /// Hooks of slot `index`.
    pub fn slot_hooks(index: usize) -> Option<Hooks> {
        L::slot_hooks(index)
    }

    pub(crate) fn slots_mut(&mut self) -> &mut L {
        &mut self.slots
    }
}

// =============================================================================
// Invocation
// =============================================================================

impl<L: AspectList> Chain<L> {
    /// Run `op` with every shared-view hook around it.
    ///
    /// A panic leaving `op` is shown to the `error` hooks and then resumed
    /// with the same payload; `after` does not run.
    pub fn invoke<R, F>(&self, op: F) -> R
    where
        F: FnOnce() -> R,
    {
        engine::run::<L, _, Plain, R, F>(&self.slots, ThreadSite, op)
    }

    /// Run `op` with every hook callable through `&mut`.
    pub fn invoke_mut<R, F>(&mut self, op: F) -> R
    where
        F: FnOnce() -> R,
    {
        engine::run_mut::<L, _, Plain, R, F>(&mut self.slots, ThreadSite, op)
    }

    /// Like [`invoke`](Self::invoke), but an `Err` is a failure as well:
    /// the `error` hooks see it and it is returned unchanged.
    pub fn try_invoke<T, E, F>(&self, op: F) -> Result<T, E>
    where
        E: Reason,
        F: FnOnce() -> Result<T, E>,
    {
        engine::run::<L, _, Checked, Result<T, E>, F>(&self.slots, ThreadSite, op)
    }

    pub fn try_invoke_mut<T, E, F>(&mut self, op: F) -> Result<T, E>
    where
        E: Reason,
        F: FnOnce() -> Result<T, E>,
    {
        engine::run_mut::<L, _, Checked, Result<T, E>, F>(&mut self.slots, ThreadSite, op)
    }

    /// [`invoke`](Self::invoke) against an explicit call-site context.
    pub fn invoke_in<C, R, F>(&self, context: C, op: F) -> R
    where
        C: SiteContext,
        F: FnOnce() -> R,
    {
        engine::run::<L, C, Plain, R, F>(&self.slots, context, op)
    }

    pub fn invoke_mut_in<C, R, F>(&mut self, context: C, op: F) -> R
    where
        C: SiteContext,
        F: FnOnce() -> R,
    {
        engine::run_mut::<L, C, Plain, R, F>(&mut self.slots, context, op)
    }
}

// =============================================================================
// Nesting
// =============================================================================

/// A chain is itself an aspect: its hooks run its own traversal.
impl<L: AspectList> Aspect for Chain<L> {
    const HOOKS: Hooks = L::HOOKS;

    fn before(&self) {
        self.slots.run_before()
    }
    fn before_mut(&mut self) {
        self.slots.run_before_mut()
    }
    fn after(&self) {
        self.slots.run_after()
    }
    fn after_mut(&mut self) {
        self.slots.run_after_mut()
    }
    fn error(&self, failure: &Failure<'_>) {
        self.slots.run_error(failure)
    }
    fn error_mut(&mut self, failure: &Failure<'_>) {
        self.slots.run_error_mut(failure)
    }
    fn destroy(&self) {
        self.slots.run_destroy()
    }
    fn destroy_mut(&mut self) {
        self.slots.run_destroy_mut()
    }
}
