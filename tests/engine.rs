//! Failure handling and call-site bookkeeping of `invoke`.

use std::cell::{Cell, RefCell};
use std::panic::{self, AssertUnwindSafe};
use std::rc::Rc;

use tola_aop::prelude::*;
use tola_aop::{mark_site, SiteContext, ThreadSite};

type Log = Rc<RefCell<Vec<String>>>;

struct Logger {
    log: Log,
}

#[aspect]
impl Logger {
    fn before(&self) {
        self.log.borrow_mut().push("enter".into());
    }

    fn after(&self) {
        self.log.borrow_mut().push("exit".into());
    }
}

struct Guard {
    name: &'static str,
    log: Log,
}

#[aspect]
impl Guard {
    fn error(&self, failure: &Failure<'_>) {
        let what = match failure.message() {
            Some(msg) => format!("{} failed: {msg}", self.name),
            None => format!("{} failed: {failure}", self.name),
        };
        self.log.borrow_mut().push(what);
    }
}

#[derive(Debug, PartialEq)]
struct Declined(u32);

fn entries(log: &Log) -> Vec<String> {
    log.borrow().clone()
}

#[test]
fn panic_reaches_error_hooks_and_is_resumed() {
    let log = Log::default();
    let chain = Chain::new((Logger { log: log.clone() }, Guard { name: "guard", log: log.clone() }));

    let caught = panic::catch_unwind(AssertUnwindSafe(|| {
        chain.invoke(|| -> u32 { panic!("boom") })
    }));

    let payload = caught.expect_err("the panic must propagate");
    assert_eq!(payload.downcast_ref::<&str>(), Some(&"boom"));
    assert_eq!(entries(&log), ["enter", "guard failed: boom"]);
}

#[test]
fn error_hooks_run_innermost_first() {
    let log = Log::default();
    let chain = Chain::new((
        Guard { name: "outer", log: log.clone() },
        Guard { name: "inner", log: log.clone() },
    ));

    let result: Result<(), Declined> = chain.try_invoke(|| Err(Declined(3)));

    assert_eq!(result, Err(Declined(3)));
    assert_eq!(
        entries(&log),
        ["inner failed: Declined(3)", "outer failed: Declined(3)"]
    );
}

#[test]
fn err_values_skip_after_and_come_back_unchanged() {
    let log = Log::default();
    let chain = Chain::new((Logger { log: log.clone() }, Counter::new()));

    let result = chain.try_invoke(|| Err::<u8, _>(Declined(9)));

    assert_eq!(result, Err(Declined(9)));
    assert_eq!(entries(&log), ["enter"]);
    assert_eq!(chain.get::<1>().error_calls(), 1);
    assert_eq!(chain.get::<1>().after_calls(), 0);
}

#[test]
fn ok_values_are_successes() {
    let chain = Chain::new((Counter::new(),));
    let result = chain.try_invoke(|| Ok::<_, Declined>(5));

    assert_eq!(result, Ok(5));
    assert_eq!(chain.get::<0>().after_calls(), 1);
    assert_eq!(chain.get::<0>().error_calls(), 0);
}

#[test]
fn plain_invoke_treats_err_as_a_value() {
    let chain = Chain::new((Counter::new(),));
    let result = chain.invoke(|| Err::<(), _>(Declined(1)));

    assert!(result.is_err());
    assert_eq!(chain.get::<0>().after_calls(), 1);
}

#[test]
fn panic_passes_untouched_without_error_hooks() {
    let log = Log::default();
    let chain = Chain::new((Logger { log: log.clone() },));

    let caught = panic::catch_unwind(AssertUnwindSafe(|| {
        chain.invoke(|| -> () { panic::panic_any(17_i32) })
    }));

    assert_eq!(caught.unwrap_err().downcast_ref::<i32>(), Some(&17));
    assert_eq!(entries(&log), ["enter"]);
}

#[test]
fn failure_downcasts_to_the_original_value() {
    struct Inspect(Cell<Option<u32>>);

    #[aspect]
    impl Inspect {
        fn error(&self, failure: &Failure<'_>) {
            assert!(failure.is_error());
            self.0.set(failure.downcast_ref::<Declined>().map(|d| d.0));
        }
    }

    let chain = Chain::new((Inspect(Cell::new(None)),));
    let _ = chain.try_invoke(|| Err::<(), _>(Declined(11)));
    assert_eq!(chain.get::<0>().0.get(), Some(11));
}

// =============================================================================
// Call site
// =============================================================================

struct SiteProbe {
    seen: RefCell<Vec<CallSite>>,
}

#[aspect]
impl SiteProbe {
    fn before(&self) {
        self.seen.borrow_mut().push(current_site());
    }

    fn after(&self) {
        self.seen.borrow_mut().push(current_site());
    }

    fn error(&self, _failure: &Failure<'_>) {
        self.seen.borrow_mut().push(current_site());
    }
}

fn transfer(amount: u64) -> u64 {
    mark_site!();
    amount * 2
}

#[test]
fn operation_marks_its_own_site() {
    let chain = Chain::new((SiteProbe { seen: RefCell::new(Vec::new()) },));

    assert_eq!(chain.invoke(|| transfer(4)), 8);

    let seen = chain.get::<0>().seen.borrow();
    assert!(seen[0].is_unknown());
    assert!(seen[1].function().ends_with("transfer"), "{}", seen[1]);
}

#[test]
fn outer_site_is_restored_after_success_and_failure() {
    let outer = CallSite::new("outer.rs", "outer", 10, 1);
    ThreadSite.set(outer);

    let chain = Chain::new((SiteProbe { seen: RefCell::new(Vec::new()) },));
    chain.invoke(|| transfer(1));
    assert_eq!(current_site(), outer);

    let _ = chain.try_invoke(|| {
        mark_site!();
        Err::<(), _>(Declined(0))
    });
    assert_eq!(current_site(), outer);

    let _ = panic::catch_unwind(AssertUnwindSafe(|| {
        chain.invoke(|| -> u64 {
            transfer(2);
            panic!("after marking")
        })
    }));
    assert_eq!(current_site(), outer);

    ThreadSite.set(CallSite::UNKNOWN);
}

#[test]
fn nested_invokes_restore_the_enclosing_site() {
    let outer_chain = Chain::new((SiteProbe { seen: RefCell::new(Vec::new()) },));
    let inner_chain = Chain::new((Counter::new(),));

    outer_chain.invoke(|| {
        mark_site!();
        let doubled = inner_chain.invoke(|| transfer(3));
        assert_eq!(doubled, 6);
        doubled
    });

    let seen = outer_chain.get::<0>().seen.borrow();
    assert!(seen[1].function().contains("nested_invokes_restore_the_enclosing_site"));
    assert!(!seen[1].function().ends_with("transfer"));
}

/// Marks its own site, then runs an unrelated chain from inside `before`.
struct Reentrant {
    inner: Chain<(SiteProbe,)>,
    seen: RefCell<Vec<CallSite>>,
}

const HOOK_SITE: CallSite = CallSite::new("hook.rs", "reentrant", 1, 1);

#[aspect]
impl Reentrant {
    fn before(&self) {
        ThreadSite.set(HOOK_SITE);
        assert_eq!(self.inner.invoke(|| transfer(5)), 10);
        self.seen.borrow_mut().push(current_site());
    }
}

#[test]
fn invoke_from_a_hook_restores_the_hook_site() {
    let outer = CallSite::new("outer.rs", "outer", 20, 1);
    ThreadSite.set(outer);

    let chain = Chain::new((Reentrant {
        inner: Chain::new((SiteProbe { seen: RefCell::new(Vec::new()) },)),
        seen: RefCell::new(Vec::new()),
    },));
    assert_eq!(chain.invoke(|| 1 + 1), 2);

    let reentrant = chain.get::<0>();
    assert_eq!(*reentrant.seen.borrow(), [HOOK_SITE]);

    let inner_seen = reentrant.inner.get::<0>().seen.borrow();
    assert!(inner_seen[0].is_unknown());
    assert!(inner_seen[1].function().ends_with("transfer"), "{}", inner_seen[1]);
    drop(inner_seen);

    assert_eq!(current_site(), outer);
    ThreadSite.set(CallSite::UNKNOWN);
}

/// A context that counts how often it is written.
#[derive(Default)]
struct Recording {
    marker: Cell<u32>,
    writes: Cell<u32>,
}

impl SiteContext for Recording {
    type Marker = u32;

    fn current(&self) -> u32 {
        self.marker.get()
    }

    fn set(&self, marker: u32) {
        self.writes.set(self.writes.get() + 1);
        self.marker.set(marker);
    }

    fn unset(&self) -> u32 {
        0
    }

    fn is_unset(&self, marker: &u32) -> bool {
        *marker == 0
    }
}

#[test]
fn injected_context_is_saved_and_restored() {
    let context = Recording::default();
    context.marker.set(5);

    let chain = Chain::new((Counter::new(),));
    let seen = chain.invoke_in(&context, || {
        let seen = context.current();
        context.set(8);
        seen
    });

    assert_eq!(seen, 0);
    assert_eq!(context.current(), 5);
    assert_eq!(context.writes.get(), 3);
}
