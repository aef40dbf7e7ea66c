//! User-facing macro implementations
//!
//! | Macro | Usage | Purpose |
//! |-------|-------|---------|
//! | `#[aspect]` | on inherent impl | Derive `Aspect` and `HOOKS` from hook methods |
//! | `#[derive(Aspect)]` | on struct/enum | Aspect without hooks |

mod aspect;

pub use aspect::{expand_aspect_attr, expand_derive_aspect};
