//! `#[aspect]` and `#[derive(Aspect)]`.

use std::cell::Cell;
use std::marker::PhantomData;

use tola_aop::prelude::*;
use tola_aop::{Access, Hook, HookView};

struct Both {
    shared: Cell<u32>,
    exclusive: u32,
}

#[aspect]
impl Both {
    /// Docs and attributes travel with the hook.
    #[inline]
    fn before(&self) {
        self.shared.set(self.shared.get() + 1);
    }

    fn before_mut(&mut self) {
        self.exclusive += 1;
    }

    pub fn total(&self) -> u32 {
        self.shared.get() + self.exclusive
    }

    const LIMIT: u32 = 10;
}

struct Renamed {
    errors: u32,
}

#[aspect]
impl Renamed {
    fn error(&mut self, _failure: &Failure<'_>) {
        self.errors += 1;
    }

    fn destroy(&self) {}
}

#[test]
fn receivers_pick_the_view() {
    assert_eq!(Both::HOOKS, Hooks::BEFORE.union(Hooks::BEFORE_MUT));
    assert_eq!(Renamed::HOOKS, Hooks::ERROR_MUT.union(Hooks::DESTROY));

    assert_eq!(
        Renamed::HOOKS.view(Access::Shared),
        HookView { before: false, after: false, error: false, destroy: true }
    );
    assert!(Renamed::HOOKS.has(Hook::Error, Access::Exclusive));
    assert!(!Renamed::HOOKS.has(Hook::Error, Access::Shared));
}

#[test]
fn each_view_calls_its_own_hook() {
    let mut chain = Chain::new((Both { shared: Cell::new(0), exclusive: 0 },));

    chain.invoke(|| ());
    chain.invoke_mut(|| ());
    chain.invoke_mut(|| ());

    let both = chain.get::<0>();
    assert_eq!(both.shared.get(), 1);
    assert_eq!(both.exclusive, 2);
    assert_eq!(both.total(), 3);
    assert_eq!(Both::LIMIT, 10);
}

#[test]
fn mut_receiver_is_renamed_to_the_exclusive_hook() {
    let mut chain = Chain::new((Renamed { errors: 0 },));

    let _ = chain.try_invoke(|| Err::<(), _>("shared view cannot see it"));
    assert_eq!(chain.get::<0>().errors, 0);

    let _ = chain.try_invoke_mut(|| Err::<(), _>("exclusive view can"));
    assert_eq!(chain.get::<0>().errors, 1);
}

struct Tagged<T> {
    hits: Cell<usize>,
    _marker: PhantomData<T>,
}

#[aspect]
impl<T: Default> Tagged<T>
where
    T: Clone,
{
    fn after(&self) {
        self.hits.set(self.hits.get() + 1);
    }
}

#[test]
fn generic_impls_are_supported() {
    let chain = Chain::new((Tagged::<String> { hits: Cell::new(0), _marker: PhantomData },));
    chain.invoke(|| ());
    assert_eq!(chain.get::<0>().hits.get(), 1);
    assert_eq!(<Tagged<String> as Aspect>::HOOKS, Hooks::AFTER);
}

#[derive(Aspect, Clone, Copy, Debug, Default)]
struct Plain;

#[derive(Aspect)]
enum Mode<'a, T: Copy> {
    Fast(&'a T),
    Slow,
}

#[test]
fn derived_aspects_have_no_hooks() {
    assert!(Plain::HOOKS.is_empty());
    assert!(<Mode<'static, u8> as Aspect>::HOOKS.is_empty());

    let value = 3_u8;
    let chain = Chain::new((Plain, Mode::Fast(&value), Mode::<u8>::Slow));
    assert_eq!(chain.invoke(|| 11), 11);
}
