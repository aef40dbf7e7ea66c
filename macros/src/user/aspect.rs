//! `#[aspect]` and `#[derive(Aspect)]`.
//!
//! ```ignore
//! #[aspect]
//! impl Audit {
//!     fn before(&self) { .. }            // Hooks::BEFORE
//!     fn after(&mut self) { .. }         // Hooks::AFTER_MUT, becomes `after_mut`
//!     fn error_mut(&mut self, f: &Failure<'_>) { .. }
//!     fn helper(&self) { .. }            // stays inherent
//! }
//! ```
//!
//! expands to an inherent impl with the non-hook items and an `Aspect` impl
//! holding the hooks plus the derived `HOOKS` constant.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{
    spanned::Spanned, DeriveInput, FnArg, ImplItem, ImplItemFn, ItemImpl, ReturnType, Type,
    Visibility,
};

use crate::common::{aspect_trait, classify, hooks_type, HookDef};

/// A hook method after validation.
struct HookFn {
    def: HookDef,
    exclusive: bool,
    method: ImplItemFn,
}

pub fn expand_aspect_attr(attr: TokenStream, item: ItemImpl) -> syn::Result<TokenStream> {
    if !attr.is_empty() {
        return Err(syn::Error::new_spanned(attr, "#[aspect] takes no arguments"));
    }
    if let Some((_, path, _)) = &item.trait_ {
        return Err(syn::Error::new_spanned(
            path,
            "#[aspect] goes on an inherent impl block, not a trait impl",
        ));
    }

    let mut hooks: Vec<HookFn> = Vec::new();
    let mut rest: Vec<ImplItem> = Vec::new();

    for impl_item in item.items.iter().cloned() {
        let method = match impl_item {
            ImplItem::Fn(method) => method,
            other => {
                rest.push(other);
                continue;
            }
        };
        let Some((def, suffixed)) = classify(&method.sig.ident.to_string()) else {
            rest.push(ImplItem::Fn(method));
            continue;
        };

        let hook = check_hook(def, suffixed, method)?;
        if let Some(prev) = hooks.iter().find(|h| h.def == hook.def && h.exclusive == hook.exclusive) {
            let mut err = syn::Error::new(
                hook.method.sig.span(),
                format!("hook `{}` is defined twice", hook.def.method(hook.exclusive)),
            );
            err.combine(syn::Error::new(prev.method.sig.span(), "first defined here"));
            return Err(err);
        }
        hooks.push(hook);
    }

    let aspect = aspect_trait();
    let hooks_ty = hooks_type();
    let flags = hooks.iter().map(|h| h.def.flag(h.exclusive));
    let methods = hooks.iter().map(|h| &h.method);

    let (impl_generics, _, where_clause) = item.generics.split_for_impl();
    let self_ty = &item.self_ty;
    let attrs = &item.attrs;

    let inherent = if rest.is_empty() {
        quote! {}
    } else {
        let unsafety = &item.unsafety;
        quote! {
            #(#attrs)*
            #unsafety impl #impl_generics #self_ty #where_clause {
                #(#rest)*
            }
        }
    };

    Ok(quote! {
        #inherent

        impl #impl_generics #aspect for #self_ty #where_clause {
            const HOOKS: #hooks_ty = #hooks_ty::NONE #(.union(#hooks_ty::#flags))*;

            #(#methods)*
        }
    })
}

/// Validate one hook method and normalize its name to the view it serves.
fn check_hook(def: HookDef, suffixed: bool, mut method: ImplItemFn) -> syn::Result<HookFn> {
    let sig = &method.sig;
    let name = sig.ident.to_string();

    if let Some(token) = &sig.asyncness {
        return Err(syn::Error::new_spanned(token, format!("hook `{name}` cannot be async")));
    }
    if let Some(token) = &sig.constness {
        return Err(syn::Error::new_spanned(token, format!("hook `{name}` cannot be const")));
    }
    if let Some(token) = &sig.unsafety {
        return Err(syn::Error::new_spanned(token, format!("hook `{name}` cannot be unsafe")));
    }
    if let Some(abi) = &sig.abi {
        return Err(syn::Error::new_spanned(abi, format!("hook `{name}` cannot declare an ABI")));
    }
    if !sig.generics.params.is_empty() || sig.generics.where_clause.is_some() {
        return Err(syn::Error::new_spanned(
            &sig.generics,
            format!("hook `{name}` cannot be generic; expected `{}`", def.signature()),
        ));
    }

    let exclusive = match sig.inputs.first() {
        Some(FnArg::Receiver(recv)) if recv.reference.is_some() && recv.colon_token.is_none() => {
            recv.mutability.is_some()
        }
        Some(FnArg::Receiver(recv)) => {
            return Err(syn::Error::new_spanned(
                recv,
                format!("hook `{name}` must take `&self` or `&mut self`"),
            ));
        }
        _ => {
            return Err(syn::Error::new_spanned(
                sig,
                format!("hook `{name}` needs a receiver; expected `{}`", def.signature()),
            ));
        }
    };
    if suffixed && !exclusive {
        return Err(syn::Error::new_spanned(
            &sig.inputs,
            format!("hook `{name}` must take `&mut self`; write `{}` for the shared view", def.name),
        ));
    }

    let args = sig.inputs.len() - 1;
    if args != def.args {
        return Err(syn::Error::new_spanned(
            &sig.inputs,
            format!(
                "hook `{name}` takes {} argument(s) besides the receiver, found {args}; expected `{}`",
                def.args,
                def.signature(),
            ),
        ));
    }

    if let ReturnType::Type(_, ty) = &sig.output {
        if !is_unit(ty) {
            return Err(syn::Error::new_spanned(ty, format!("hook `{name}` cannot return a value")));
        }
    }

    method.sig.ident = def.method(exclusive);
    method.vis = Visibility::Inherited;
    method.defaultness = None;
    Ok(HookFn { def, exclusive, method })
}

fn is_unit(ty: &Type) -> bool {
    match ty {
        Type::Tuple(tuple) => tuple.elems.is_empty(),
        Type::Paren(inner) => is_unit(&inner.elem),
        _ => false,
    }
}

/// `#[derive(Aspect)]`: an aspect with no hooks.
pub fn expand_derive_aspect(input: DeriveInput) -> TokenStream {
    let aspect = aspect_trait();
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    quote! {
        impl #impl_generics #aspect for #name #ty_generics #where_clause {}
    }
}
