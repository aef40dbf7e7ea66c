//! # Layer 3: Hosts
//!
//! A host pairs a [`Chain`] with a target and runs operations against that
//! target under the chain's hooks.
//!
//! ```text
//! Wrapper<P, L>          Embedded<T, L>
//! ┌──────────┐           ┌──────────┐
//! │ Chain<L> │           │ Chain<L> │
//! │ handle P ├──▶ target │ target T │  destroy N-1..0, then drop T
//! └──────────┘           └──────────┘
//! ```
//!
//! Both implement [`Host`] (and [`HostMut`] when the target can be borrowed
//! exclusively), so `invoke` accepts the same operations on either:
//!
//! ```ignore
//! host.invoke(|| 2 + 2, ());              // Direct
//! host.invoke(Account::balance, ());      // ByRef: &target supplied first
//! host.invoke_mut(Account::deposit, (5,)) // ByMut
//! ```

pub mod embedded;
pub mod wrapper;

pub use embedded::Embedded;
pub use wrapper::Wrapper;

use crate::chain::{AspectList, Chain};
use crate::engine::Reason;
use crate::probe::{Operation, OperationMut};

/// A chain paired with a target that can be borrowed shared.
pub trait Host {
    type Target: ?Sized;
    type Aspects: AspectList;

    /// The chain and the target, borrowed together.
    fn split(&self) -> (&Chain<Self::Aspects>, &Self::Target);

    /// Run `op` against the target under the shared view of the chain.
    ///
    /// `op` is called directly with `args` when it can be, otherwise with
    /// `&target` prepended.
    fn invoke<Op, Args, F>(&self, op: Op, args: Args) -> Op::Output
    where
        Op: Operation<Self::Target, Args, F>,
    {
        let (chain, target) = self.split();
        chain.invoke(|| op.call(target, args))
    }

    /// Like [`invoke`](Host::invoke), with `Err` treated as a failure.
    fn try_invoke<Op, Args, F, T, E>(&self, op: Op, args: Args) -> Result<T, E>
    where
        Op: Operation<Self::Target, Args, F, Output = Result<T, E>>,
        E: Reason,
    {
        let (chain, target) = self.split();
        chain.try_invoke(|| op.call(target, args))
    }
}

/// A host whose target can also be borrowed exclusively.
pub trait HostMut: Host {
    fn split_mut(&mut self) -> (&mut Chain<Self::Aspects>, &mut Self::Target);

    /// Run `op` under the exclusive view: `&mut target` may be prepended,
    /// and `*_mut` hooks are preferred.
    fn invoke_mut<Op, Args, F>(&mut self, op: Op, args: Args) -> Op::Output
    where
        Op: OperationMut<Self::Target, Args, F>,
    {
        let (chain, target) = self.split_mut();
        chain.invoke_mut(|| op.call_mut(target, args))
    }

    fn try_invoke_mut<Op, Args, F, T, E>(&mut self, op: Op, args: Args) -> Result<T, E>
    where
        Op: OperationMut<Self::Target, Args, F, Output = Result<T, E>>,
        E: Reason,
    {
        let (chain, target) = self.split_mut();
        chain.try_invoke_mut(|| op.call_mut(target, args))
    }
}
