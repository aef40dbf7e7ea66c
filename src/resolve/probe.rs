//! Inherent-const fallback probes behind `construction!`.
//!
//! `Probe::<D, S>::IMPLICIT` finds the inherent `true` constant when
//! `D: From<S>` and the fallback trait's `false` otherwise; `EXPLICIT` and
//! `DEFAULT` work the same way for `TryFrom` and `Default`.
//!
//! Only concrete types resolve this way. Inside `fn f<D, S>()` the
//! fallback always wins; generic code should use trait bounds instead.

use core::marker::PhantomData;

/// Probe carrier for a destination slot `D` and its initializer `S`.
#[doc(hidden)]
pub struct Probe<D, S>(PhantomData<(D, S)>);

/// Fallback trait plus inherent const for a conversion trait.
macro_rules! impl_probe {
    ($Trait:ident => $CONST:ident) => {
        ::paste::paste! {
            #[doc(hidden)]
            pub trait [<$Trait Fallback>] {
                const $CONST: bool = false;
            }
            impl<D, S> [<$Trait Fallback>] for Probe<D, S> {}
            impl<D: $Trait<S>, S> Probe<D, S> {
                pub const $CONST: bool = true;
            }
        }
    };
}

impl_probe!(From => IMPLICIT);
impl_probe!(TryFrom => EXPLICIT);

// `Default` takes no initializer; it is probed as `Probe<D, ()>`.
#[doc(hidden)]
pub trait DefaultFallback {
    const DEFAULT: bool = false;
}
impl<D, S> DefaultFallback for Probe<D, S> {}
impl<D: Default> Probe<D, ()> {
    pub const DEFAULT: bool = true;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Meters(u32);
    impl From<u32> for Meters {
        fn from(v: u32) -> Self {
            Meters(v)
        }
    }

    struct Small(u8);
    impl TryFrom<u32> for Small {
        type Error = core::num::TryFromIntError;
        fn try_from(v: u32) -> Result<Self, Self::Error> {
            u8::try_from(v).map(Small)
        }
    }

    #[test]
    fn probes_resolve_on_concrete_types() {
        assert!(Probe::<Meters, u32>::IMPLICIT);
        assert!(Probe::<Meters, u32>::EXPLICIT);

        assert!(!Probe::<Small, u32>::IMPLICIT);
        assert!(Probe::<Small, u32>::EXPLICIT);

        assert!(!Probe::<Small, &str>::EXPLICIT);
        assert!(Probe::<u64, ()>::DEFAULT);
        assert!(!Probe::<Meters, ()>::DEFAULT);

        let _ = (Meters(0).0, Small(0).0);
    }
}
