//! Hook capability sets.
//!
//! Every aspect type publishes a [`Hooks`] constant: one bit per
//! (hook, view) pair. Generic code reads the constant, so a hook an aspect
//! does not define is folded away at compile time.
//!
//! ```text
//!            shared (&self)   exclusive (&mut self)
//! before     BEFORE           BEFORE_MUT
//! after      AFTER            AFTER_MUT
//! error      ERROR            ERROR_MUT
//! destroy    DESTROY          DESTROY_MUT
//! ```
//!
//! Exclusive access can always reborrow as shared, so under
//! [`Access::Exclusive`] a hook counts as present if *either* bit is set.

use core::fmt;

/// One of the four lifecycle hooks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Hook {
    Before,
    After,
    Error,
    Destroy,
}

impl Hook {
    pub const ALL: [Hook; 4] = [Hook::Before, Hook::After, Hook::Error, Hook::Destroy];

    pub const fn name(self) -> &'static str {
        match self {
            Hook::Before => "before",
            Hook::After => "after",
            Hook::Error => "error",
            Hook::Destroy => "destroy",
        }
    }

    const fn shared_bit(self) -> u8 {
        match self {
            Hook::Before => 1 << 0,
            Hook::After => 1 << 2,
            Hook::Error => 1 << 4,
            Hook::Destroy => 1 << 6,
        }
    }

    const fn exclusive_bit(self) -> u8 {
        self.shared_bit() << 1
    }
}

/// The view an invocation holds on its aspects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Access {
    /// `&self`: only shared-view hooks are callable.
    Shared,
    /// `&mut self`: hooks of either view are callable.
    Exclusive,
}

// =============================================================================
// Hooks
// =============================================================================

/// Set of hooks an aspect defines, per view.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Hooks {
    bits: u8,
}

impl Hooks {
    pub const NONE: Hooks = Hooks { bits: 0 };

    pub const BEFORE: Hooks = Hooks::shared(Hook::Before);
    pub const BEFORE_MUT: Hooks = Hooks::exclusive(Hook::Before);
    pub const AFTER: Hooks = Hooks::shared(Hook::After);
    pub const AFTER_MUT: Hooks = Hooks::exclusive(Hook::After);
    pub const ERROR: Hooks = Hooks::shared(Hook::Error);
    pub const ERROR_MUT: Hooks = Hooks::exclusive(Hook::Error);
    pub const DESTROY: Hooks = Hooks::shared(Hook::Destroy);
    pub const DESTROY_MUT: Hooks = Hooks::exclusive(Hook::Destroy);

    const SHARED_MASK: u8 = 0b0101_0101;

    /// The shared-view flag of `hook`.
    pub const fn shared(hook: Hook) -> Hooks {
        Hooks { bits: hook.shared_bit() }
    }

    /// The exclusive-view flag of `hook`.
    pub const fn exclusive(hook: Hook) -> Hooks {
        Hooks { bits: hook.exclusive_bit() }
    }

    pub const fn union(self, other: Hooks) -> Hooks {
        Hooks { bits: self.bits | other.bits }
    }

    pub const fn contains(self, other: Hooks) -> bool {
        self.bits & other.bits == other.bits
    }

    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Whether `hook` is callable under `access`.
    pub const fn has(self, hook: Hook, access: Access) -> bool {
        let mask = match access {
            Access::Shared => hook.shared_bit(),
            Access::Exclusive => hook.shared_bit() | hook.exclusive_bit(),
        };
        self.bits & mask != 0
    }

    /// Drop every exclusive-view flag.
    ///
    /// Used by adaptors that can only hand out `&A`.
    pub const fn shared_only(self) -> Hooks {
        Hooks { bits: self.bits & Self::SHARED_MASK }
    }

    /// The four booleans for one view.
    pub const fn view(self, access: Access) -> HookView {
        HookView {
            before: self.has(Hook::Before, access),
            after: self.has(Hook::After, access),
            error: self.has(Hook::Error, access),
            destroy: self.has(Hook::Destroy, access),
        }
    }
}

impl fmt::Debug for Hooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut set = f.debug_set();
        for hook in Hook::ALL {
            if self.contains(Hooks::shared(hook)) {
                set.entry(&format_args!("{}", hook.name()));
            }
            if self.contains(Hooks::exclusive(hook)) {
                set.entry(&format_args!("{}_mut", hook.name()));
            }
        }
        set.finish()
    }
}

/// Hook presence under a single view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct HookView {
    pub before: bool,
    pub after: bool,
    pub error: bool,
    pub destroy: bool,
}
