//! Tuple impls of `AspectList`, `Slot<I>`, `IntoList` and `TryIntoList`.

use proc_macro2::{Literal, Span, TokenStream};
use quote::quote;
use syn::{Ident, Index};

use super::MaxArity;
use crate::common::{aspect_trait, hooks_type, krate};

fn idents(prefix: &str, n: usize) -> Vec<Ident> {
    (0..n)
        .map(|i| Ident::new(&format!("{prefix}{i}"), Span::call_site()))
        .collect()
}

pub fn expand_aspect_lists(input: MaxArity) -> TokenStream {
    let impls = (1..=input.max).map(|n| {
        let list = expand_list(n);
        let slots = expand_slots(n);
        let conversions = expand_conversions(n);
        quote! { #list #slots #conversions }
    });
    quote! { #(#impls)* }
}

/// `AspectList` for `(A0, .., An-1)`.
fn expand_list(n: usize) -> TokenStream {
    let krate = krate();
    let aspect = aspect_trait();
    let hooks = hooks_type();
    let hook = quote! { #krate::probe::Hook };
    let access = quote! { #krate::probe::Access };

    let tys = idents("A", n);
    let forward: Vec<usize> = (0..n).collect();
    let reverse: Vec<usize> = (0..n).rev().collect();

    // `if A_i::HOOKS.has(..) { <A_i as Aspect>::method(&self.i, args) }`
    let visit = |order: &[usize], name: &str, kind: &str, exclusive: bool, arg: TokenStream| {
        let method = Ident::new(name, Span::call_site());
        let kind = Ident::new(kind, Span::call_site());
        let view = if exclusive { quote! { Exclusive } } else { quote! { Shared } };
        let borrow = if exclusive { quote! { &mut } } else { quote! { & } };
        let calls = order.iter().map(|&i| {
            let ty = &tys[i];
            let idx = Index::from(i);
            quote! {
                if <#ty as #aspect>::HOOKS.has(#hook::#kind, #access::#view) {
                    <#ty as #aspect>::#method(#borrow self.#idx #arg);
                }
            }
        });
        quote! { #(#calls)* }
    };

    let before = visit(&forward, "before", "Before", false, quote! {});
    let before_mut = visit(&forward, "before_mut", "Before", true, quote! {});
    let after = visit(&reverse, "after", "After", false, quote! {});
    let after_mut = visit(&reverse, "after_mut", "After", true, quote! {});
    let error = visit(&reverse, "error", "Error", false, quote! { , failure });
    let error_mut = visit(&reverse, "error_mut", "Error", true, quote! { , failure });
    let destroy = visit(&reverse, "destroy", "Destroy", false, quote! {});
    let destroy_mut = visit(&reverse, "destroy_mut", "Destroy", true, quote! {});

    let slot_hooks = tys.iter().enumerate().map(|(i, ty)| {
        quote! { #i => ::core::option::Option::Some(<#ty as #aspect>::HOOKS), }
    });

    quote! {
        impl<#(#tys: #aspect),*> #krate::chain::AspectList for (#(#tys,)*) {
            const LEN: usize = #n;
            const HOOKS: #hooks = #hooks::NONE #(.union(<#tys as #aspect>::HOOKS))*;

            fn slot_hooks(index: usize) -> ::core::option::Option<#hooks> {
                match index {
                    #(#slot_hooks)*
                    _ => ::core::option::Option::None,
                }
            }

            #[inline(always)]
            fn run_before(&self) { #before }
            #[inline(always)]
            fn run_before_mut(&mut self) { #before_mut }
            #[inline(always)]
            fn run_after(&self) { #after }
            #[inline(always)]
            fn run_after_mut(&mut self) { #after_mut }
            #[inline(always)]
            fn run_error(&self, failure: &#krate::engine::Failure<'_>) { #error }
            #[inline(always)]
            fn run_error_mut(&mut self, failure: &#krate::engine::Failure<'_>) { #error_mut }
            #[inline(always)]
            fn run_destroy(&self) { #destroy }
            #[inline(always)]
            fn run_destroy_mut(&mut self) { #destroy_mut }
        }
    }
}

/// `Slot<I>` for every position of `(A0, .., An-1)`.
fn expand_slots(n: usize) -> TokenStream {
    let krate = krate();
    let tys = idents("A", n);

    let impls = (0..n).map(|i| {
        let ty = &tys[i];
        let idx = Index::from(i);
        let pos = Literal::usize_unsuffixed(i);
        quote! {
            impl<#(#tys),*> #krate::chain::Slot<#pos> for (#(#tys,)*) {
                type Aspect = #ty;

                #[inline(always)]
                fn slot(&self) -> &#ty {
                    &self.#idx
                }

                #[inline(always)]
                fn slot_mut(&mut self) -> &mut #ty {
                    &mut self.#idx
                }
            }
        }
    });
    quote! { #(#impls)* }
}

/// `IntoList` / `TryIntoList` from `(S0, ..)` to `(D0, ..)`.
fn expand_conversions(n: usize) -> TokenStream {
    let krate = krate();
    let src = idents("S", n);
    let dst = idents("D", n);
    let idx: Vec<Index> = (0..n).map(Index::from).collect();
    let pos: Vec<usize> = (0..n).collect();

    quote! {
        impl<#(#src,)* #(#dst: ::core::convert::From<#src>),*> #krate::chain::IntoList<(#(#dst,)*)>
            for (#(#src,)*)
        {
            #[inline]
            fn into_list(self) -> (#(#dst,)*) {
                (#(<#dst as ::core::convert::From<#src>>::from(self.#idx),)*)
            }
        }

        impl<#(#src,)* #(#dst),*> #krate::chain::TryIntoList<(#(#dst,)*)> for (#(#src,)*)
        where
            #(
                #dst: ::core::convert::TryFrom<#src>,
                <#dst as ::core::convert::TryFrom<#src>>::Error: ::core::convert::Into<#krate::resolve::BoxError>,
            )*
        {
            fn try_into_list(self) -> ::core::result::Result<(#(#dst,)*), #krate::resolve::ConstructError> {
                ::core::result::Result::Ok((#(
                    <#dst as ::core::convert::TryFrom<#src>>::try_from(self.#idx)
                        .map_err(|e| #krate::resolve::ConstructError::slot(#pos, e))?,
                )*))
            }
        }
    }
}
