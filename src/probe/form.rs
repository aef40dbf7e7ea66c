//! Invocation forms.
//!
//! An operation handed to a host is either a plain callable or a method of
//! the host's target. Which one is decided by trait resolution on a marker
//! type parameter, so the host never inspects anything at runtime:
//!
//! | Form | Operation shape | Dispatch |
//! |------|-----------------|----------|
//! | [`Direct`] | `FnOnce(A0, .., An) -> R` | `op(a0, .., an)` |
//! | [`ByRef`] | `FnOnce(&T, A0, .., An) -> R` | `op(&target, a0, .., an)` |
//! | [`ByMut`] | `FnOnce(&mut T, A0, .., An) -> R` | `op(&mut target, a0, .., an)` |
//!
//! Method paths work as-is: `host.invoke(Account::balance, ())` resolves to
//! `ByRef`, `host.invoke_mut(Vec::push, (7,))` to `ByMut`.
//!
//! Arguments travel as a tuple of arity 0..=8. Closures with unannotated
//! parameters match several forms at once; annotate the first parameter
//! (`|a: &Account| ..`) to pick one.
//!
//! An operation that fits no form does not compile:
//!
//! ```compile_fail
//! use tola_aop::prelude::*;
//!
//! let target = 5_u32;
//! let host = Wrapper::from_aspects(&target, (Counter::new(),));
//! host.invoke(|s: &str| s.len(), ());
//! ```

/// Marker: the operation is called with the arguments alone.
pub struct Direct;

/// Marker: the operation receives `&Target` first.
pub struct ByRef;

/// Marker: the operation receives `&mut Target` first.
pub struct ByMut;

/// Runtime name of a form, for introspection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InvocationForm {
    Direct,
    ByRef,
    ByMut,
}

/// Maps a form marker to its [`InvocationForm`].
pub trait Form {
    const KIND: InvocationForm;
}

impl Form for Direct {
    const KIND: InvocationForm = InvocationForm::Direct;
}

impl Form for ByRef {
    const KIND: InvocationForm = InvocationForm::ByRef;
}

impl Form for ByMut {
    const KIND: InvocationForm = InvocationForm::ByMut;
}

// =============================================================================
// Operation traits
// =============================================================================

/// An operation callable against a shared target.
#[diagnostic::on_unimplemented(
    message = "no viable invocation form: `{Self}` cannot be called with arguments `{Args}`",
    label = "neither callable directly nor as a method taking `&{Target}`",
    note = "operations take their arguments as a tuple, e.g. `host.invoke(Type::method, (a, b))`"
)]
pub trait Operation<Target: ?Sized, Args, F> {
    type Output;

    fn call(self, target: &Target, args: Args) -> Self::Output;
}

/// An operation callable against an exclusive target.
#[diagnostic::on_unimplemented(
    message = "no viable invocation form: `{Self}` cannot be called with arguments `{Args}`",
    label = "neither callable directly nor as a method taking `&{Target}` or `&mut {Target}`",
    note = "operations take their arguments as a tuple, e.g. `host.invoke_mut(Type::method, (a, b))`"
)]
pub trait OperationMut<Target: ?Sized, Args, F> {
    type Output;

    fn call_mut(self, target: &mut Target, args: Args) -> Self::Output;
}

// Direct / ByRef / ByMut impls for argument tuples of arity 0..=8.
macros::impl_operation_forms!(8);

/// Which form `op` resolves to against `Target` with `Args`.
///
/// ```ignore
/// assert_eq!(form_of::<Account, (), _, _>(&Account::balance), InvocationForm::ByRef);
/// ```
pub fn form_of<Target, Args, F, Op>(op: &Op) -> InvocationForm
where
    Target: ?Sized,
    F: Form,
    Op: OperationMut<Target, Args, F>,
{
    let _ = op;
    F::KIND
}
