//! # Layer 1: Aspect Chain
//!
//! An ordered, fixed-length sequence of aspects, stored as a tuple.
//!
//! ```text
//! Chain<(Log, Auth, Retry)>
//!
//!   invoke ─▶ Log.before ─▶ Auth.before ─▶ Retry.before ─▶ op
//!   result ◀─ Log.after  ◀─ Auth.after  ◀─ Retry.after  ◀─┘
//! ```
//!
//! Slot 0 is the outermost aspect: first in, last out.

#[allow(clippy::module_inception)]
pub mod chain;
pub mod list;

pub use chain::Chain;
pub use list::{AspectList, IntoList, Slot, TryIntoList};
