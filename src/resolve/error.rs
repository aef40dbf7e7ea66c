//! Errors of explicit (fallible) construction.

use thiserror::Error;

/// Boxed source error of a rejected conversion.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// An explicit construction was attempted and a conversion refused it.
#[derive(Debug, Error)]
pub enum ConstructError {
    /// Slot `index` could not be built from its initializer.
    #[error("aspect slot {index} rejected its initializer: {source}")]
    Slot {
        index: usize,
        #[source]
        source: BoxError,
    },

    /// The target of an embedded host could not be built from its arguments.
    #[error("embedded target rejected its arguments: {source}")]
    Target {
        #[source]
        source: BoxError,
    },
}

impl ConstructError {
    pub fn slot(index: usize, source: impl Into<BoxError>) -> Self {
        ConstructError::Slot { index, source: source.into() }
    }

    pub fn target(source: impl Into<BoxError>) -> Self {
        ConstructError::Target { source: source.into() }
    }

    /// Index of the failing slot, if a slot failed.
    pub fn index(&self) -> Option<usize> {
        match self {
            ConstructError::Slot { index, .. } => Some(*index),
            ConstructError::Target { .. } => None,
        }
    }
}
