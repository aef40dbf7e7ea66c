//! # Layer 0: Diagnostic Context
//!
//! A thread-local "current call site" that hooks can read to learn which
//! operation they are wrapping. Purely observational: it never affects which
//! hooks run or what an invocation returns.
//!
//! ```ignore
//! fn transfer(amount: u64) -> u64 {
//!     mark_site!();               // claims the invocation, first mark wins
//!     amount
//! }
//!
//! #[aspect]
//! impl Audit {
//!     fn after(&self) {
//!         println!("left {}", current_site());
//!     }
//! }
//! ```
//!
//! Every `invoke` saves the caller's marker, resets it so the operation can
//! mark itself, and restores the caller's marker on the way out.

pub mod call_site;
pub mod context;

pub use call_site::CallSite;
pub use context::{current_site, mark, SiteContext, SiteScope, ThreadSite};

/// The [`CallSite`] of the macro invocation.
#[macro_export]
macro_rules! call_site {
    () => {{
        fn __here() {}
        fn __type_name_of<T>(_: T) -> &'static str {
            ::core::any::type_name::<T>()
        }
        $crate::site::CallSite::new(
            file!(),
            $crate::site::call_site::__function_name(__type_name_of(__here)),
            line!(),
            column!(),
        )
    }};
}

/// Record the enclosing function as the current call site, unless something
/// already marked the current invocation.
#[macro_export]
macro_rules! mark_site {
    () => {
        $crate::site::mark($crate::call_site!())
    };
}
