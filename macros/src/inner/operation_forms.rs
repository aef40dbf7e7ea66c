//! `Operation` / `OperationMut` impls for argument tuples.
//!
//! For arity `n` this emits five impls:
//!
//! ```text
//! Operation<T, (A0..), Direct>     Func: FnOnce(A0..) -> R
//! Operation<T, (A0..), ByRef>      Func: FnOnce(&T, A0..) -> R
//! OperationMut<T, (A0..), Direct>  Func: FnOnce(A0..) -> R
//! OperationMut<T, (A0..), ByRef>   Func: FnOnce(&T, A0..) -> R
//! OperationMut<T, (A0..), ByMut>   Func: FnOnce(&mut T, A0..) -> R
//! ```

use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::Ident;

use super::MaxArity;
use crate::common::krate;

pub fn expand_operation_forms(input: MaxArity) -> TokenStream {
    let impls = (0..=input.max).map(expand_arity);
    quote! { #(#impls)* }
}

fn expand_arity(n: usize) -> TokenStream {
    let krate = krate();
    let form = quote! { #krate::probe::form };

    let tys: Vec<Ident> = (0..n)
        .map(|i| Ident::new(&format!("A{i}"), Span::call_site()))
        .collect();
    let vals: Vec<Ident> = (0..n)
        .map(|i| Ident::new(&format!("a{i}"), Span::call_site()))
        .collect();
    let args = quote! { (#(#tys,)*) };
    let unpack = quote! { let (#(#vals,)*) = args; };

    quote! {
        impl<T: ?Sized, Func, R, #(#tys),*> #form::Operation<T, #args, #form::Direct> for Func
        where
            Func: ::core::ops::FnOnce(#(#tys),*) -> R,
        {
            type Output = R;

            #[inline(always)]
            fn call(self, _target: &T, args: #args) -> R {
                #unpack
                self(#(#vals),*)
            }
        }

        impl<T: ?Sized, Func, R, #(#tys),*> #form::Operation<T, #args, #form::ByRef> for Func
        where
            Func: ::core::ops::FnOnce(&T, #(#tys),*) -> R,
        {
            type Output = R;

            #[inline(always)]
            fn call(self, target: &T, args: #args) -> R {
                #unpack
                self(target, #(#vals),*)
            }
        }

        impl<T: ?Sized, Func, R, #(#tys),*> #form::OperationMut<T, #args, #form::Direct> for Func
        where
            Func: ::core::ops::FnOnce(#(#tys),*) -> R,
        {
            type Output = R;

            #[inline(always)]
            fn call_mut(self, _target: &mut T, args: #args) -> R {
                #unpack
                self(#(#vals),*)
            }
        }

        impl<T: ?Sized, Func, R, #(#tys),*> #form::OperationMut<T, #args, #form::ByRef> for Func
        where
            Func: ::core::ops::FnOnce(&T, #(#tys),*) -> R,
        {
            type Output = R;

            #[inline(always)]
            fn call_mut(self, target: &mut T, args: #args) -> R {
                #unpack
                self(&*target, #(#vals),*)
            }
        }

        impl<T: ?Sized, Func, R, #(#tys),*> #form::OperationMut<T, #args, #form::ByMut> for Func
        where
            Func: ::core::ops::FnOnce(&mut T, #(#tys),*) -> R,
        {
            type Output = R;

            #[inline(always)]
            fn call_mut(self, target: &mut T, args: #args) -> R {
                #unpack
                self(target, #(#vals),*)
            }
        }
    }
}
