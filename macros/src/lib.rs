//! Procedural macros for tola-aop
//!
//! | Macro | Target | Purpose |
//! |-------|--------|---------|
//! | `#[aspect]` | inherent impl | Implement `Aspect`, deriving `HOOKS` from the hook methods |
//! | `#[derive(Aspect)]` | struct/enum | Aspect with no hooks |
//! | `impl_aspect_lists!(n)` | - | Internal: tuple impls of the chain traits |
//! | `impl_operation_forms!(n)` | - | Internal: invocation form impls |
//!
//! ## Example
//!
//! ```ignore
//! struct Stopwatch { started: Cell<Option<Instant>> }
//!
//! #[aspect]
//! impl Stopwatch {
//!     fn before(&self) { self.started.set(Some(Instant::now())); }
//!     fn after(&self) { println!("{:?}", self.started.get().map(|t| t.elapsed())); }
//! }
//! ```

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput, ItemImpl};

// =============================================================================
// Module Declarations (Three-tier: inner / common / user)
// =============================================================================

mod common;
mod inner;
mod user;

// =============================================================================
// Internal Macros (inner/)
// =============================================================================

/// Generate `AspectList`, `Slot<I>`, `IntoList` and `TryIntoList` for tuples
/// of arity 1..=n.
///
/// # Usage
/// ```ignore
/// impl_aspect_lists!(12);
/// ```
#[proc_macro]
pub fn impl_aspect_lists(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as inner::MaxArity);
    inner::aspect_lists::expand_aspect_lists(input).into()
}

/// Generate the `Direct` / `ByRef` / `ByMut` operation impls for argument
/// tuples of arity 0..=n.
#[proc_macro]
pub fn impl_operation_forms(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as inner::MaxArity);
    inner::operation_forms::expand_operation_forms(input).into()
}

// =============================================================================
// User Macros (user/)
// =============================================================================

/// Turn an inherent impl into an `Aspect` impl.
///
/// Methods named `before`, `after`, `error` or `destroy` (optionally with a
/// `_mut` suffix) are hooks. The receiver picks the view: `&self` sets the
/// shared flag, `&mut self` the exclusive one (and the method is renamed to
/// its `_mut` form). All other items stay in an inherent impl.
///
/// Hooks take no arguments except `error`, which takes `&Failure<'_>`.
/// They return `()` and cannot be generic, async, const or unsafe.
#[proc_macro_attribute]
pub fn aspect(attr: TokenStream, item: TokenStream) -> TokenStream {
    let item = parse_macro_input!(item as ItemImpl);
    user::expand_aspect_attr(attr.into(), item)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Implement `Aspect` with no hooks.
#[proc_macro_derive(Aspect)]
pub fn derive_aspect(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    user::expand_derive_aspect(input).into()
}
