// Common utilities shared between internal and user-facing macros
//
// - hooks: the hook name table
// - paths: absolute paths into the runtime crate

mod hooks;
mod paths;

pub use hooks::*;
pub use paths::*;
