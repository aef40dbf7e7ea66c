//! Host that owns its target.

use core::mem::ManuallyDrop;
use core::ops::{Deref, DerefMut};
use core::ptr;

use super::{Host, HostMut};
use crate::chain::{AspectList, Chain, IntoList, TryIntoList};
use crate::log::trace;
use crate::probe::{Access, Hook};
use crate::resolve::{BoxError, ConstructError};

/// A chain plus the target it guards, owned together.
///
/// Dropping an `Embedded` runs every `destroy` hook, innermost slot first,
/// and only then drops the target. The host derefs to its target, so it can
/// stand in for it wherever a `&T` is expected.
///
/// ```
/// use tola_aop::prelude::*;
///
/// let mut cart = Embedded::from_aspects((Counter::new(),), Vec::<u32>::new());
/// cart.invoke_mut(Vec::<u32>::push, (7,));
/// cart.invoke_mut(Vec::<u32>::push, (9,));
///
/// assert_eq!(cart.len(), 2);
/// assert_eq!(cart.chain().get::<0>().before_calls(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct Embedded<T, L: AspectList> {
    chain: Chain<L>,
    target: T,
}

impl<T, L: AspectList> Embedded<T, L> {
    /// Pair an existing chain with the target it will own.
    pub fn new(chain: Chain<L>, target: T) -> Self {
        Embedded { chain, target }
    }

    pub fn from_aspects(aspects: L, target: T) -> Self {
        Embedded::new(Chain::new(aspects), target)
    }

    /// Build the target from the remaining arguments.
    pub fn with<Args>(chain: Chain<L>, args: Args) -> Self
    where
        T: From<Args>,
    {
        Embedded::new(chain, T::from(args))
    }

    /// Build the target fallibly; a refusal is [`ConstructError::Target`].
    pub fn try_with<Args>(chain: Chain<L>, args: Args) -> Result<Self, ConstructError>
    where
        T: TryFrom<Args>,
        T::Error: Into<BoxError>,
    {
        let target = T::try_from(args).map_err(ConstructError::target)?;
        Ok(Embedded::new(chain, target))
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn target_mut(&mut self) -> &mut T {
        &mut self.target
    }

    pub fn chain(&self) -> &Chain<L> {
        &self.chain
    }

    pub fn chain_mut(&mut self) -> &mut Chain<L> {
        &mut self.chain
    }

    /// Take the host apart without running `destroy`.
    pub fn into_parts(self) -> (Chain<L>, T) {
        let this = ManuallyDrop::new(self);
        // SAFETY: `this` is never used or dropped again, so each field is
        // read out exactly once.
        unsafe { (ptr::read(&this.chain), ptr::read(&this.target)) }
    }

    /// Move into a host of other types, converting every part implicitly.
    ///
    /// The aspects are carried over, not torn down: `destroy` fires once,
    /// when the resulting host drops.
    pub fn convert<U, M>(self) -> Embedded<U, M>
    where
        U: From<T>,
        M: AspectList,
        L: IntoList<M>,
    {
        let (chain, target) = self.into_parts();
        Embedded {
            chain: chain.convert(),
            target: U::from(target),
        }
    }

    /// Fallible [`convert`](Self::convert).
    ///
    /// The target converts first. If it refuses, the untouched chain runs
    /// `destroy` before the refusal (and any target it carries back) is
    /// released. If a slot refuses, the converted target is dropped; the
    /// original aspects were consumed by their own conversions.
    pub fn try_convert<U, M>(self) -> Result<Embedded<U, M>, ConstructError>
    where
        U: TryFrom<T>,
        U::Error: Into<BoxError>,
        M: AspectList,
        L: TryIntoList<M>,
    {
        let (mut chain, target) = self.into_parts();
        let target = match U::try_from(target) {
            Ok(target) => target,
            Err(refused) => {
                trace!(aspects = L::LEN, "target refused conversion, running destroy hooks");
                chain.slots_mut().run_destroy_mut();
                return Err(ConstructError::target(refused));
            }
        };
        let chain = chain.try_convert()?;
        Ok(Embedded { chain, target })
    }
}

impl<T: Default, L: AspectList + Default> Default for Embedded<T, L> {
    fn default() -> Self {
        Embedded::new(Chain::default(), T::default())
    }
}

impl<T, L: AspectList> Drop for Embedded<T, L> {
    fn drop(&mut self) {
        if L::HOOKS.has(Hook::Destroy, Access::Exclusive) {
            trace!(aspects = L::LEN, "running destroy hooks");
        }
        self.chain.slots_mut().run_destroy_mut();
    }
}

impl<T, L: AspectList> Deref for Embedded<T, L> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.target
    }
}

impl<T, L: AspectList> DerefMut for Embedded<T, L> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.target
    }
}

impl<T, L: AspectList> Host for Embedded<T, L> {
    type Target = T;
    type Aspects = L;

    fn split(&self) -> (&Chain<L>, &T) {
        (&self.chain, &self.target)
    }
}

impl<T, L: AspectList> HostMut for Embedded<T, L> {
    fn split_mut(&mut self) -> (&mut Chain<L>, &mut T) {
        (&mut self.chain, &mut self.target)
    }
}
