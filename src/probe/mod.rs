//! # Layer 0: Capability Probe
//!
//! Decides, at compile time, which hooks an aspect defines and how an
//! operation reaches its target.
//!
//! ```text
//! probe/
//! ├── hooks.rs  - Hooks bit set, Hook, Access, HookView
//! ├── aspect.rs - Aspect trait, ReadOnly and pointer adaptors
//! └── form.rs   - Operation / OperationMut and the Direct/ByRef/ByMut forms
//! ```

pub mod aspect;
pub mod form;
pub mod hooks;

pub use aspect::{Aspect, ReadOnly};
pub use form::{form_of, ByMut, ByRef, Direct, Form, InvocationForm, Operation, OperationMut};
pub use hooks::{Access, Hook, HookView, Hooks};
