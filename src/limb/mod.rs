//! Definitions and arithmetic primitives related to [Limb], the basic unit of fixed-width
//! integer arithmetic.
use core::fmt;
use num_traits::{PrimInt, Unsigned, WrappingAdd, WrappingSub};
use subtle::ConstantTimeEq;

use super::consts::Constants;

/// The basic unit used by the fixed-width integer arithmetic implementation.
///
/// Implemented for `u8`, `u16`, `u32` and `u64` only. Each limb type names a
/// [`Double`](Limb::Double) type of twice its width, wide enough to hold a full limb by limb
/// product plus two more limb sized addends without loss:
/// `(2^n - 1)^2 + 2 * (2^n - 1) = 2^2n - 1`.
///
/// Carries and borrows between limbs are never derived from the host's overflow flags: the
/// single limb primitives below use wrapping operations and detect the wraparound by comparing
/// against the operands.
pub trait Limb:
    PrimInt
    + Unsigned
    + WrappingAdd
    + WrappingSub
    + ConstantTimeEq
    + Constants
    + fmt::Debug
    + 'static
{
    /// The widened intermediate type.
    type Double: PrimInt + Unsigned + fmt::Debug;

    /// The bit width of the limb type.
    const BITS: u32;

    /// Zero-extend into the widened type.
    fn widen(self) -> Self::Double;

    /// The [`Limb::BITS`] lower bits of a double.
    fn narrow(v: Self::Double) -> Self;

    /// The [`Limb::BITS`] upper bits of a double.
    fn high(v: Self::Double) -> Self;

    /// Lossless conversion of a small digit value.
    fn from_digit(d: u8) -> Self;
}

macro_rules! impl_limb {
    ($lt:ty, $dt:ty) => {
        impl Limb for $lt {
            type Double = $dt;

            const BITS: u32 = <$lt>::BITS;

            #[inline(always)]
            fn widen(self) -> $dt {
                self as $dt
            }

            #[inline(always)]
            fn narrow(v: $dt) -> Self {
                v as $lt
            }

            #[inline(always)]
            fn high(v: $dt) -> Self {
                (v >> <$lt>::BITS) as $lt
            }

            #[inline(always)]
            #[allow(clippy::unnecessary_cast)]
            fn from_digit(d: u8) -> Self {
                d as $lt
            }
        }
    };
}

impl_limb!(u8, u16);
impl_limb!(u16, u32);
impl_limb!(u32, u64);
impl_limb!(u64, u128);

/// Add two limbs and an incoming carry.
///
/// Returns a pair of carry and the [`Limb::BITS`] lower bits of the sum.
///
/// # Arguments:
///
/// * `v0` - first operand
/// * `v1` - second operand
/// * `carry` - incoming carry, either zero or one
///
pub fn add_l_l_c<L: Limb>(v0: L, v1: L, carry: L) -> (L, L) {
    debug_assert!(carry <= L::ONE);
    let sum = v0.wrapping_add(&v1);
    let total = sum.wrapping_add(&carry);
    // At most one of the two additions can wrap.
    let carry = if sum < v0 || total < sum { L::ONE } else { L::ZERO };
    (carry, total)
}

#[cfg(test)]
fn test_add_l_l_c<L: Limb>() {
    let max = L::max_value();
    let msb = L::ONE << (L::BITS as usize - 1);
    assert_eq!(add_l_l_c(L::ZERO, L::ZERO, L::ZERO), (L::ZERO, L::ZERO));
    assert_eq!(add_l_l_c(L::ONE, L::ONE, L::ZERO), (L::ZERO, L::TWO));
    assert_eq!(add_l_l_c(L::ONE, L::ONE, L::ONE), (L::ZERO, L::THREE));
    assert_eq!(add_l_l_c(max - L::ONE, L::ONE, L::ZERO), (L::ZERO, max));
    assert_eq!(add_l_l_c(max, L::ONE, L::ZERO), (L::ONE, L::ZERO));
    assert_eq!(add_l_l_c(max, L::ZERO, L::ONE), (L::ONE, L::ZERO));
    assert_eq!(add_l_l_c(msb, msb, L::ZERO), (L::ONE, L::ZERO));
    assert_eq!(add_l_l_c(max, max, L::ZERO), (L::ONE, max - L::ONE));
    assert_eq!(add_l_l_c(max, max, L::ONE), (L::ONE, max));
}

#[test]
fn test_add_l_l_c_u8() {
    test_add_l_l_c::<u8>()
}

#[test]
fn test_add_l_l_c_u16() {
    test_add_l_l_c::<u16>()
}

#[test]
fn test_add_l_l_c_u32() {
    test_add_l_l_c::<u32>()
}

#[test]
fn test_add_l_l_c_u64() {
    test_add_l_l_c::<u64>()
}

/// Subtract a limb and an incoming borrow from another limb.
///
/// Returns a pair of borrow and the [`Limb::BITS`] lower bits of the difference.
///
/// # Arguments:
///
/// * `v0` - minuend
/// * `v1` - subtrahend
/// * `borrow` - incoming borrow, either zero or one
///
pub fn sub_l_l_b<L: Limb>(v0: L, v1: L, borrow: L) -> (L, L) {
    debug_assert!(borrow <= L::ONE);
    let diff = v0.wrapping_sub(&v1);
    let total = diff.wrapping_sub(&borrow);
    let borrow = if diff > v0 || total > diff { L::ONE } else { L::ZERO };
    (borrow, total)
}

#[cfg(test)]
fn test_sub_l_l_b<L: Limb>() {
    let max = L::max_value();
    let msb = L::ONE << (L::BITS as usize - 1);
    assert_eq!(sub_l_l_b(L::ZERO, L::ZERO, L::ZERO), (L::ZERO, L::ZERO));
    assert_eq!(sub_l_l_b(L::ONE, L::ZERO, L::ZERO), (L::ZERO, L::ONE));
    assert_eq!(sub_l_l_b(L::ZERO, L::ONE, L::ZERO), (L::ONE, max));
    assert_eq!(sub_l_l_b(L::ZERO, L::ZERO, L::ONE), (L::ONE, max));
    assert_eq!(sub_l_l_b(L::ONE, L::ONE, L::ONE), (L::ONE, max));
    assert_eq!(sub_l_l_b(L::THREE, L::ONE, L::ONE), (L::ZERO, L::ONE));
    assert_eq!(sub_l_l_b(msb, msb, L::ZERO), (L::ZERO, L::ZERO));
    assert_eq!(sub_l_l_b(L::ZERO, msb, L::ZERO), (L::ONE, msb));
    assert_eq!(sub_l_l_b(msb, msb + L::ONE, L::ZERO), (L::ONE, max));
    assert_eq!(sub_l_l_b(max, max, L::ONE), (L::ONE, max));
}

#[test]
fn test_sub_l_l_b_u8() {
    test_sub_l_l_b::<u8>()
}

#[test]
fn test_sub_l_l_b_u16() {
    test_sub_l_l_b::<u16>()
}

#[test]
fn test_sub_l_l_b_u32() {
    test_sub_l_l_b::<u32>()
}

#[test]
fn test_sub_l_l_b_u64() {
    test_sub_l_l_b::<u64>()
}

/// Multiply two limbs and add the product to an accumulator limb and a carry.
///
/// The computation is carried out in the widened [`Limb::Double`] type. Returns a pair of the
/// outgoing carry, i.e. the upper half of the double, and the lower half.
///
/// # Arguments:
///
/// * `acc` - accumulator limb
/// * `v0` - first factor
/// * `v1` - second factor
/// * `carry` - incoming carry, any limb value
///
pub fn mul_add_l_l_l_c<L: Limb>(acc: L, v0: L, v1: L, carry: L) -> (L, L) {
    let product = v0.widen() * v1.widen();
    let partial = acc.widen() + carry.widen();
    let sum = partial + product;
    (L::high(sum), L::narrow(sum))
}

#[cfg(test)]
fn test_mul_add_l_l_l_c<L: Limb>() {
    let max = L::max_value();
    let msb = L::ONE << (L::BITS as usize - 1);
    assert_eq!(mul_add_l_l_l_c(L::ZERO, L::ZERO, L::ZERO, L::ZERO), (L::ZERO, L::ZERO));
    assert_eq!(mul_add_l_l_l_c(L::ZERO, L::TWO, L::TWO, L::ZERO), (L::ZERO, L::TWO + L::TWO));
    assert_eq!(mul_add_l_l_l_c(L::ZERO, msb, L::TWO, L::ZERO), (L::ONE, L::ZERO));
    assert_eq!(mul_add_l_l_l_c(L::ZERO, msb, msb, L::ZERO), (msb >> 1, L::ZERO));
    assert_eq!(mul_add_l_l_l_c(L::ZERO, max, max, L::ZERO), (max - L::ONE, L::ONE));
    // The largest possible inputs exactly fill the double.
    assert_eq!(mul_add_l_l_l_c(max, max, max, max), (max, max));
    assert_eq!(mul_add_l_l_l_c(L::ONE, L::ZERO, L::ZERO, max), (L::ONE, L::ZERO));
}

#[test]
fn test_mul_add_l_l_l_c_u8() {
    test_mul_add_l_l_l_c::<u8>()
}

#[test]
fn test_mul_add_l_l_l_c_u16() {
    test_mul_add_l_l_l_c::<u16>()
}

#[test]
fn test_mul_add_l_l_l_c_u32() {
    test_mul_add_l_l_l_c::<u32>()
}

#[test]
fn test_mul_add_l_l_l_c_u64() {
    test_mul_add_l_l_l_c::<u64>()
}

/// Add a carry of arbitrary limb value to a limb in the widened type.
///
/// Returns a pair of outgoing carry and the [`Limb::BITS`] lower bits of the sum.
pub fn add_l_c<L: Limb>(v: L, carry: L) -> (L, L) {
    let sum = v.widen() + carry.widen();
    (L::high(sum), L::narrow(sum))
}

#[test]
fn test_add_l_c() {
    assert_eq!(add_l_c(0u8, 0u8), (0, 0));
    assert_eq!(add_l_c(200u8, 55u8), (0, 255));
    assert_eq!(add_l_c(200u8, 56u8), (1, 0));
    assert_eq!(add_l_c(255u8, 255u8), (1, 254));
    assert_eq!(add_l_c(!0u64, 63u64), (1, 62));
}

// Position of MSB + 1, if any, zero otherwise.
pub fn find_last_set_bit_l<L: Limb>(v: L) -> usize {
    (L::BITS - v.leading_zeros()) as usize
}

#[cfg(test)]
fn test_find_last_set_bit_l<L: Limb>() {
    assert_eq!(find_last_set_bit_l(L::ZERO), 0);

    for i in 0..L::BITS as usize {
        let v = L::ONE << i;
        assert_eq!(find_last_set_bit_l(v), i + 1);
        assert_eq!(find_last_set_bit_l(v - L::ONE), i);
    }
    assert_eq!(find_last_set_bit_l(L::max_value()), L::BITS as usize);
}

#[test]
fn test_find_last_set_bit_l_u8() {
    test_find_last_set_bit_l::<u8>()
}

#[test]
fn test_find_last_set_bit_l_u16() {
    test_find_last_set_bit_l::<u16>()
}

#[test]
fn test_find_last_set_bit_l_u32() {
    test_find_last_set_bit_l::<u32>()
}

#[test]
fn test_find_last_set_bit_l_u64() {
    test_find_last_set_bit_l::<u64>()
}
