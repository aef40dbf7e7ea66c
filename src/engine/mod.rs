//! # Layer 2: Invocation Engine
//!
//! Orchestrates one call: hooks before, the operation, hooks after or on
//! error, with the call-site marker saved and restored around it.
//!
//! The entry points live on [`Chain`](crate::Chain) and on the hosts; this
//! module holds the protocol they share.

pub mod failure;
pub mod invoke;

pub use failure::{Failure, Reason};
pub use invoke::{run, run_mut, Checked, Completion, Plain};
