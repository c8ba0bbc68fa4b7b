//! Named small constants for scalar and fixed-width integer types.
//!
//! Generic arithmetic code obtains its literals through these traits instead of hardcoding them
//! for a concrete type.

use core::num::NonZeroUsize;

/// Named constants of a scalar type, usable in `const` contexts.
pub trait Constants: Sized {
    const ZERO: Self;
    const ONE: Self;
    const TWO: Self;
    const THREE: Self;
    const TEN: Self;
}

macro_rules! impl_constants {
    ($($t:ty),*) => {
        $(
            impl Constants for $t {
                const ZERO: Self = 0;
                const ONE: Self = 1;
                const TWO: Self = 2;
                const THREE: Self = 3;
                const TEN: Self = 10;
            }
        )*
    };
}

impl_constants!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

/// Named constants of a type whose instances additionally carry a bit width.
///
/// The constant is held in the least significant limb, all higher limbs are zero.
pub trait SizedConstants: Sized {
    fn zero(bits: NonZeroUsize) -> Self;
    fn one(bits: NonZeroUsize) -> Self;
    fn two(bits: NonZeroUsize) -> Self;
    fn three(bits: NonZeroUsize) -> Self;
    fn ten(bits: NonZeroUsize) -> Self;
}

#[test]
fn test_scalar_constants() {
    assert_eq!(<u8 as Constants>::ZERO, 0);
    assert_eq!(<u16 as Constants>::ONE, 1);
    assert_eq!(<u32 as Constants>::TWO, 2);
    assert_eq!(<u64 as Constants>::THREE, 3);
    assert_eq!(<i32 as Constants>::TEN, 10);

    const T: u128 = <u128 as Constants>::TEN;
    assert_eq!(T * T, 100);
}
