//! Logging shim.
//!
//! Forwards to `tracing` when the `tracing` feature is on and expands to
//! nothing otherwise, so the engine's log points cost nothing in builds that
//! opt out.

#[cfg(feature = "tracing")]
macro_rules! trace {
    ($($arg:tt)*) => { ::tracing::trace!(target: "tola_aop", $($arg)*) };
}

#[cfg(feature = "tracing")]
macro_rules! debug {
    ($($arg:tt)*) => { ::tracing::debug!(target: "tola_aop", $($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

pub(crate) use {debug, trace};
