//! # tola-aop
//!
//! Aspect chains with compile-time hook detection.
//!
//! **Wrap any call in `before` / `after` / `error` / `destroy` hooks, paying
//! only for the hooks that exist.**
//!
//! ## Architecture
//!
//! An *aspect* is any type implementing [`Aspect`]. It overrides a subset of
//! four hooks, each in a shared (`&self`) and/or exclusive (`&mut self`)
//! view, and publishes that subset as the constant [`Aspect::HOOKS`]. A
//! [`Chain`] holds a tuple of aspects; invoking an operation through it
//! runs the hooks in stack order:
//!
//! ```text
//! before:  A0 ─▶ A1 ─▶ A2 ─▶ operation
//! after:                     operation ─▶ A2 ─▶ A1 ─▶ A0
//! error:                     operation ─▶ A2 ─▶ A1 ─▶ A0 ─▶ re-raise
//! ```
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Probe & Site                                            |
//! |  - Hooks, Aspect, invocation forms, CallSite, SiteContext         |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Chain & Resolve                                         |
//! |  - Chain<L>, AspectList, Slot<I>, Construction, construction!     |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: Engine                                                  |
//! |  - run / run_mut, Failure, call-site save & restore               |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 3: Hosts                                                   |
//! |  - Wrapper<P, L> (borrowed target), Embedded<T, L> (owned target) |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use tola_aop::prelude::*;
//!
//! #[derive(Default)]
//! struct Audit {
//!     log: std::cell::RefCell<Vec<&'static str>>,
//! }
//!
//! #[aspect]
//! impl Audit {
//!     fn before(&self) {
//!         self.log.borrow_mut().push("enter");
//!     }
//!     fn after(&self) {
//!         self.log.borrow_mut().push("exit");
//!     }
//! }
//!
//! struct Account {
//!     balance: u64,
//! }
//!
//! impl Account {
//!     fn deposit(&mut self, amount: u64) -> u64 {
//!         self.balance += amount;
//!         self.balance
//!     }
//! }
//!
//! let mut account = Account { balance: 10 };
//! let mut host = Wrapper::from_aspects(&mut account, (Audit::default(),));
//!
//! assert_eq!(host.invoke_mut(Account::deposit, (5,)), 15);
//! assert_eq!(*host.chain().get::<0>().log.borrow(), ["enter", "exit"]);
//! ```
//!
//! ## Features
//!
//! - `tracing` (default): engine log points on the failure and teardown
//!   paths, and the [`Trace`](aspects::Trace) aspect.

// Allow `::tola_aop` to work inside the crate itself
extern crate self as tola_aop;

mod log;

// =============================================================================
// Layer 0: Probe & Site
// =============================================================================
pub mod probe;
pub mod site;

// =============================================================================
// Layer 1: Chain & Resolve
// =============================================================================
pub mod chain;
pub mod resolve;

// =============================================================================
// Layer 2: Engine
// =============================================================================
pub mod engine;

// =============================================================================
// Layer 3: Hosts & ready-made aspects
// =============================================================================
pub mod aspects;
pub mod host;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use chain::{AspectList, Chain, IntoList, Slot, TryIntoList};
pub use engine::{Failure, Reason};
pub use host::{Embedded, Host, HostMut, Wrapper};
pub use probe::{
    form_of, Access, Aspect, ByMut, ByRef, Direct, Hook, HookView, Hooks, InvocationForm,
    Operation, OperationMut, ReadOnly,
};
pub use resolve::{BoxError, ConstructError, Construction};
pub use site::{current_site, CallSite, SiteContext, SiteScope, ThreadSite};

// Re-export proc-macros
pub use macros::{aspect, Aspect};

/// Common items for building and invoking chains.
pub mod prelude {
    pub use crate::aspects::Counter;
    #[cfg(feature = "tracing")]
    pub use crate::aspects::Trace;
    pub use crate::chain::Chain;
    pub use crate::engine::Failure;
    pub use crate::host::{Embedded, Host, HostMut, Wrapper};
    pub use crate::probe::{Aspect, Hooks, ReadOnly};
    pub use crate::resolve::{ConstructError, Construction};
    pub use crate::site::{current_site, CallSite};
    pub use macros::{aspect, Aspect};
    // `call_site!`, `mark_site!` and `construction!` are #[macro_export], so
    // they live at the crate root
}
