//! Hook ordering and view selection on a bare chain.

use std::cell::RefCell;
use std::rc::Rc;

use tola_aop::prelude::*;

type Log = Rc<RefCell<Vec<String>>>;

struct Rec {
    name: &'static str,
    log: Log,
}

impl Rec {
    fn new(name: &'static str, log: &Log) -> Self {
        Rec { name, log: Rc::clone(log) }
    }
}

#[aspect]
impl Rec {
    fn before(&self) {
        self.push("before");
    }

    fn after(&self) {
        self.push("after");
    }

    fn push(&self, what: &str) {
        self.log.borrow_mut().push(format!("{}.{what}", self.name));
    }
}

/// Only defines the exclusive view.
struct MutOnly {
    log: Log,
}

#[aspect]
impl MutOnly {
    fn before(&mut self) {
        self.log.borrow_mut().push("mut.before".into());
    }
}

fn entries(log: &Log) -> Vec<String> {
    log.borrow().clone()
}

#[test]
fn before_runs_forward_and_after_runs_backward() {
    let log = Log::default();
    let chain = Chain::new((Rec::new("a", &log), Rec::new("b", &log), Rec::new("c", &log)));

    let value = chain.invoke(|| {
        log.borrow_mut().push("op".into());
        42
    });

    assert_eq!(value, 42);
    assert_eq!(
        entries(&log),
        ["a.before", "b.before", "c.before", "op", "c.after", "b.after", "a.after"]
    );
}

#[test]
fn unit_operations_return_unit() {
    let log = Log::default();
    let chain = Chain::new((Rec::new("a", &log),));

    let () = chain.invoke(|| ());
    assert_eq!(entries(&log), ["a.before", "a.after"]);
}

#[test]
fn exclusive_invoke_falls_back_to_shared_hooks() {
    let log = Log::default();
    let mut chain = Chain::new((Rec::new("a", &log), MutOnly { log: Rc::clone(&log) }));

    chain.invoke_mut(|| ());
    assert_eq!(entries(&log), ["a.before", "mut.before", "a.after"]);
}

#[test]
fn shared_invoke_skips_exclusive_only_hooks() {
    let log = Log::default();
    let chain = Chain::new((MutOnly { log: Rc::clone(&log) }, Rec::new("b", &log)));

    chain.invoke(|| ());
    assert_eq!(entries(&log), ["b.before", "b.after"]);
}

#[test]
fn read_only_hides_the_exclusive_view() {
    let log = Log::default();
    let mut chain = Chain::new((ReadOnly(MutOnly { log: Rc::clone(&log) }), Rec::new("b", &log)));

    chain.invoke_mut(|| ());
    assert_eq!(entries(&log), ["b.before", "b.after"]);
    assert_eq!(<ReadOnly<MutOnly> as Aspect>::HOOKS, Hooks::NONE);
}

#[test]
fn borrowed_aspects_share_state_across_chains() {
    let log = Log::default();
    let shared = Rec::new("s", &log);

    Chain::new((&shared,)).invoke(|| ());
    Chain::new((&shared, Rec::new("x", &log))).invoke(|| ());

    assert_eq!(
        entries(&log),
        ["s.before", "s.after", "s.before", "x.before", "x.after", "s.after"]
    );
}

#[test]
fn nested_chains_keep_stack_order() {
    let log = Log::default();
    let inner = Chain::new((Rec::new("i0", &log), Rec::new("i1", &log)));
    let outer = Chain::new((Rec::new("o", &log), inner));

    outer.invoke(|| ());
    assert_eq!(
        entries(&log),
        ["o.before", "i0.before", "i1.before", "i1.after", "i0.after", "o.after"]
    );
}

#[derive(Aspect, Debug, PartialEq)]
struct Tag(u8);

#[test]
fn positional_access() {
    let mut chain = Chain::new((Counter::new(), Tag(7)));
    chain.invoke(|| ());

    assert_eq!(chain.get::<0>().before_calls(), 1);
    assert_eq!(chain.get::<1>(), &Tag(7));

    chain.get_mut::<1>().0 = 9;
    assert_eq!(chain.as_tuple().1, Tag(9));
    assert_eq!(Chain::<(Counter, Tag)>::LEN, 2);
    assert_eq!(<Tag as Aspect>::HOOKS, Hooks::NONE);
}

#[test]
fn hook_sets_are_reported_per_slot() {
    type Pair = Chain<(Counter, MutOnly)>;

    assert_eq!(Pair::slot_hooks(1), Some(Hooks::BEFORE_MUT));
    assert_eq!(Pair::slot_hooks(2), None);
    assert!(Pair::hooks().contains(Hooks::BEFORE.union(Hooks::BEFORE_MUT)));
}

#[test]
fn single_aspect_converts_into_a_chain() {
    let chain: Chain<(Counter,)> = Counter::new().into();
    chain.invoke(|| ());
    assert_eq!(chain.get::<0>().after_calls(), 1);

    let again: Chain<(Counter,)> = chain.clone().into();
    assert_eq!(again.get::<0>().after_calls(), 1);
}

/// Hand-written impl that overrides `before` but leaves `HOOKS` empty.
struct Unlisted(std::cell::Cell<u32>);

impl Aspect for Unlisted {
    fn before(&self) {
        self.0.set(self.0.get() + 1);
    }
}

#[test]
fn overrides_missing_from_hooks_never_run() {
    let chain = Chain::new((Unlisted(Default::default()), Counter::new()));
    chain.invoke(|| ());

    assert_eq!(<Unlisted as Aspect>::HOOKS, Hooks::NONE);
    assert_eq!(chain.get::<0>().0.get(), 0);
    assert_eq!(chain.get::<1>().before_calls(), 1);
}
