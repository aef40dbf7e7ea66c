//! # Layer 1: Construction Resolver
//!
//! Which initializers may build a chain, and how.
//!
//! | Mode | Rule | Entry point |
//! |------|------|-------------|
//! | Implicit | every slot is `From` its initializer | `Chain::from_values`, `convert`, `Into` |
//! | Explicit | every slot is `TryFrom`, not all are `From` | `Chain::try_from_values`, `try_convert` |
//! | Forbidden | some slot is neither | does not compile |
//!
//! The rules are enforced by trait bounds on the factories. For concrete
//! types the same answer is available as a value through [`construction!`]:
//!
//! ```
//! use tola_aop::{construction, Construction};
//!
//! struct Level(u8);
//! impl TryFrom<u32> for Level {
//!     type Error = std::num::TryFromIntError;
//!     fn try_from(v: u32) -> Result<Self, Self::Error> {
//!         u8::try_from(v).map(Level)
//!     }
//! }
//!
//! const MIXED: Construction = construction!(u64, Level; u32, u32);
//! assert_eq!(MIXED, Construction::Explicit);
//! assert_eq!(construction!(u64, i64; u32, u8), Construction::Implicit);
//! assert_eq!(construction!(u64; &str), Construction::Forbidden);
//! assert_eq!(construction!(u64, String; default), Construction::Implicit);
//! ```
//!
//! An implicit construction from explicit-only initializers is rejected
//! before anything runs:
//!
//! ```compile_fail
//! use tola_aop::{Aspect, Chain};
//!
//! struct Gate(u8);
//! impl Aspect for Gate {}
//! impl TryFrom<u32> for Gate {
//!     type Error = std::num::TryFromIntError;
//!     fn try_from(v: u32) -> Result<Self, Self::Error> {
//!         u8::try_from(v).map(Gate)
//!     }
//! }
//!
//! let _ = Chain::<(Gate,)>::from_values((7u32,));
//! ```

pub mod error;
#[doc(hidden)]
pub mod probe;

pub use error::{BoxError, ConstructError};

/// How a chain may be built from a given set of initializers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Construction {
    /// Plain conversion, no ceremony.
    Implicit,
    /// Only through a fallible, named factory.
    Explicit,
    Forbidden,
}

impl Construction {
    pub const fn is_allowed(self) -> bool {
        !matches!(self, Construction::Forbidden)
    }

    pub const fn is_implicit(self) -> bool {
        matches!(self, Construction::Implicit)
    }

    /// Combine per-slot answers: `implicit[i]` is `From`, `explicit[i]` is
    /// `TryFrom` for slot `i`.
    pub const fn from_slots(implicit: &[bool], explicit: &[bool]) -> Self {
        if all(implicit) {
            Construction::Implicit
        } else if all(explicit) {
            Construction::Explicit
        } else {
            Construction::Forbidden
        }
    }

    /// Default construction: implicit when every slot is `Default`.
    ///
    /// Rust has no "explicit-only default", so this never answers
    /// `Explicit`.
    pub const fn from_default(default: &[bool]) -> Self {
        if all(default) {
            Construction::Implicit
        } else {
            Construction::Forbidden
        }
    }
}

const fn all(flags: &[bool]) -> bool {
    let mut i = 0;
    while i < flags.len() {
        if !flags[i] {
            return false;
        }
        i += 1;
    }
    true
}

/// Construction mode of the slot types on the left from the initializer
/// types on the right, as a `const` [`Construction`].
///
/// `construction!(A, B; default)` asks about `Chain::default()` instead.
/// Both lists must have the same length. Concrete types only: inside a
/// generic function every probe falls back to `false`.
#[macro_export]
macro_rules! construction {
    ($($slot:ty),+ ; default) => {{
        #[allow(unused_imports)]
        use $crate::resolve::probe::DefaultFallback as _;
        $crate::resolve::Construction::from_default(&[
            $($crate::resolve::probe::Probe::<$slot, ()>::DEFAULT),+
        ])
    }};
    ($($slot:ty),+ ; $($init:ty),+) => {{
        #[allow(unused_imports)]
        use $crate::resolve::probe::{FromFallback as _, TryFromFallback as _};
        $crate::resolve::Construction::from_slots(
            &[$($crate::resolve::probe::Probe::<$slot, $init>::IMPLICIT),+],
            &[$($crate::resolve::probe::Probe::<$slot, $init>::EXPLICIT),+],
        )
    }};
}
