//! Host over a borrowed or shared target.

use core::mem;
use core::ops::{Deref, DerefMut};

use super::{Host, HostMut};
use crate::chain::{AspectList, Chain, IntoList, TryIntoList};
use crate::resolve::ConstructError;

/// A chain plus a pointer-like handle to a target owned elsewhere.
///
/// `P` is anything that dereferences to the target: `&T`, `&mut T`,
/// `Rc<T>`, `Arc<T>`, `Box<T>`. The borrow checker keeps reference handles
/// from outliving their target.
///
/// ```
/// use tola_aop::prelude::*;
///
/// let first = vec![1, 2, 3];
/// let second = vec![4, 5];
///
/// let mut host = Wrapper::new(&first, Chain::new((Counter::new(),)));
/// assert_eq!(host.invoke(Vec::<i32>::len, ()), 3);
///
/// host.retarget(&second);
/// assert_eq!(host.invoke(Vec::<i32>::len, ()), 2);
/// assert_eq!(host.chain().get::<0>().after_calls(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct Wrapper<P, L> {
    chain: Chain<L>,
    handle: P,
}

impl<P: Deref, L: AspectList> Wrapper<P, L> {
    /// Pair `handle` with an existing chain.
    pub fn new(handle: P, chain: Chain<L>) -> Self {
        Wrapper { chain, handle }
    }

    /// Pair `handle` with a chain of exactly these aspects.
    pub fn from_aspects(handle: P, aspects: L) -> Self {
        Wrapper::new(handle, Chain::new(aspects))
    }

    /// Pair `handle` with a chain built implicitly from `values`.
    pub fn from_values<V: IntoList<L>>(handle: P, values: V) -> Self {
        Wrapper::new(handle, Chain::from_values(values))
    }

    /// Pair `handle` with a chain built explicitly from `values`.
    pub fn try_new<V: TryIntoList<L>>(handle: P, values: V) -> Result<Self, ConstructError> {
        Ok(Wrapper {
            chain: Chain::try_from_values(values)?,
            handle,
        })
    }

    /// Point the host at another target; the chain is untouched.
    ///
    /// Returns the previous handle.
    pub fn retarget(&mut self, handle: P) -> P {
        mem::replace(&mut self.handle, handle)
    }

    pub fn target(&self) -> &P::Target {
        &*self.handle
    }

    pub fn handle(&self) -> &P {
        &self.handle
    }

    pub fn chain(&self) -> &Chain<L> {
        &self.chain
    }

    pub fn chain_mut(&mut self) -> &mut Chain<L> {
        &mut self.chain
    }

    /// Same handle, chain converted slot by slot.
    pub fn convert<M>(self) -> Wrapper<P, M>
    where
        M: AspectList,
        L: IntoList<M>,
    {
        Wrapper {
            chain: self.chain.convert(),
            handle: self.handle,
        }
    }

    pub fn try_convert<M>(self) -> Result<Wrapper<P, M>, ConstructError>
    where
        M: AspectList,
        L: TryIntoList<M>,
    {
        Ok(Wrapper {
            chain: self.chain.try_convert()?,
            handle: self.handle,
        })
    }

    pub fn into_parts(self) -> (Chain<L>, P) {
        (self.chain, self.handle)
    }
}

impl<P: DerefMut, L: AspectList> Wrapper<P, L> {
    pub fn target_mut(&mut self) -> &mut P::Target {
        &mut *self.handle
    }
}

impl<P: Deref, L: AspectList> Host for Wrapper<P, L> {
    type Target = P::Target;
    type Aspects = L;

    fn split(&self) -> (&Chain<L>, &P::Target) {
        (&self.chain, &*self.handle)
    }
}

impl<P: DerefMut, L: AspectList> HostMut for Wrapper<P, L> {
    fn split_mut(&mut self) -> (&mut Chain<L>, &mut P::Target) {
        (&mut self.chain, &mut *self.handle)
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::aspects::Counter;

    #[test]
    fn convert_carries_the_handle_not_the_pointee() {
        let target = Rc::new(String::from("shared"));
        let host = Wrapper::new(Rc::clone(&target), Chain::new((Counter::new(),)));

        let moved: Wrapper<Rc<String>, (Counter,)> = host.convert();
        assert!(Rc::ptr_eq(moved.handle(), &target));
        assert_eq!(Rc::strong_count(&target), 2);
    }

    #[test]
    fn clone_copies_the_handle() {
        let target = Rc::new(5_u32);
        let host = Wrapper::new(Rc::clone(&target), Chain::new((Counter::new(),)));
        let copy = host.clone();

        assert!(Rc::ptr_eq(copy.handle(), host.handle()));
        assert_eq!(Rc::strong_count(&target), 3);
    }
}
