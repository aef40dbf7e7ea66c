//! The fixed hook table shared by `#[aspect]` and the list generator.

use proc_macro2::Span;
use syn::Ident;

/// One of the four lifecycle hooks, as the macros see it.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct HookDef {
    /// Method name of the shared view.
    pub name: &'static str,
    /// Name of the `Hooks` constant for the shared view.
    pub flag: &'static str,
    /// Arguments after the receiver.
    pub args: usize,
}

pub const HOOKS: [HookDef; 4] = [
    HookDef { name: "before", flag: "BEFORE", args: 0 },
    HookDef { name: "after", flag: "AFTER", args: 0 },
    HookDef { name: "error", flag: "ERROR", args: 1 },
    HookDef { name: "destroy", flag: "DESTROY", args: 0 },
];

impl HookDef {
    /// Method name for a view.
    pub fn method(&self, exclusive: bool) -> Ident {
        let name = if exclusive { format!("{}_mut", self.name) } else { self.name.to_string() };
        Ident::new(&name, Span::call_site())
    }

    /// `Hooks` constant for a view.
    pub fn flag(&self, exclusive: bool) -> Ident {
        let name = if exclusive { format!("{}_MUT", self.flag) } else { self.flag.to_string() };
        Ident::new(&name, Span::call_site())
    }

    /// Signature as users should write it, for error messages.
    pub fn signature(&self) -> String {
        match self.args {
            0 => format!("fn {}(&self)", self.name),
            _ => format!("fn {}(&self, failure: &Failure<'_>)", self.name),
        }
    }
}

/// Look up a method name: `before` is `(before, false)`, `before_mut` is
/// `(before, true)`, anything else is not a hook.
pub fn classify(name: &str) -> Option<(HookDef, bool)> {
    let (base, suffixed) = match name.strip_suffix("_mut") {
        Some(base) => (base, true),
        None => (name, false),
    };
    HOOKS.iter().find(|hook| hook.name == base).map(|hook| (*hook, suffixed))
}
