//! Absolute paths into `tola_aop`.
//!
//! Generated code always goes through `::tola_aop`; the runtime crate
//! declares `extern crate self as tola_aop` so the same paths work inside it.

use proc_macro2::TokenStream;
use quote::quote;

pub fn krate() -> TokenStream {
    quote! { ::tola_aop }
}

pub fn aspect_trait() -> TokenStream {
    let krate = krate();
    quote! { #krate::probe::Aspect }
}

pub fn hooks_type() -> TokenStream {
    let krate = krate();
    quote! { #krate::probe::Hooks }
}
